//! Back/forward navigation history.

use wayfile_core::Location;

/// Current location plus the back and forward stacks.
///
/// Both stacks keep the most recent location last. A navigation event
/// pushes to at most one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    current: Location,
    back: Vec<Location>,
    forward: Vec<Location>,
}

impl NavigationHistory {
    /// Start at a location with empty histories.
    pub fn new(current: Location) -> Self {
        Self {
            current,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// The location being shown.
    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Back stack, oldest first.
    pub fn back(&self) -> &[Location] {
        &self.back
    }

    /// Forward stack, oldest first.
    pub fn forward(&self) -> &[Location] {
        &self.forward
    }

    /// Check if going back would do anything.
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Check if going forward would do anything.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Take a new path: the current location goes on the back stack and the
    /// forward stack is cleared.
    pub fn navigate_into(&mut self, target: Location) {
        let previous = std::mem::replace(&mut self.current, target);
        self.back.push(previous);
        self.forward.clear();
    }

    /// Step back one location. Returns false and changes nothing when the
    /// back stack is empty.
    pub fn go_back(&mut self) -> bool {
        let Some(target) = self.back.pop() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, target);
        self.forward.push(previous);
        true
    }

    /// Step forward one location. Returns false and changes nothing when the
    /// forward stack is empty.
    pub fn go_forward(&mut self) -> bool {
        let Some(target) = self.forward.pop() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, target);
        self.back.push(previous);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> Location {
        Location::directory(path)
    }

    #[test]
    fn test_navigate_into_clears_forward() {
        let mut history = NavigationHistory::new(loc("/a"));
        history.navigate_into(loc("/b"));
        history.go_back();
        assert!(history.can_go_forward());

        history.navigate_into(loc("/c"));
        assert!(history.forward().is_empty());
        assert_eq!(history.back(), &[loc("/a")]);
        assert_eq!(history.current(), &loc("/c"));
    }

    #[test]
    fn test_back_twice_scenario() {
        let mut history = NavigationHistory::new(loc("/a"));
        history.navigate_into(loc("/b"));
        history.navigate_into(loc("/c"));
        assert_eq!(history.back(), &[loc("/a"), loc("/b")]);

        assert!(history.go_back());
        assert_eq!(history.current(), &loc("/b"));
        assert_eq!(history.back(), &[loc("/a")]);
        assert_eq!(history.forward(), &[loc("/c")]);

        assert!(history.go_back());
        assert_eq!(history.current(), &loc("/a"));
        assert!(history.back().is_empty());
        assert_eq!(history.forward(), &[loc("/c"), loc("/b")]);
    }

    #[test]
    fn test_back_then_forward_restores() {
        let mut history = NavigationHistory::new(Location::Drives);
        history.navigate_into(loc("/"));
        history.navigate_into(loc("/home"));
        let before = history.clone();

        assert!(history.go_back());
        assert!(history.go_forward());
        assert_eq!(history, before);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut history = NavigationHistory::new(loc("/a"));
        let before = history.clone();

        assert!(!history.go_back());
        assert_eq!(history, before);
        assert!(!history.go_forward());
        assert_eq!(history, before);
    }
}
