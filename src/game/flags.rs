use super::map_data::PageConditions;
use std::collections::HashMap;

/// Global switches and variables that page conditions test
///
/// Unset switches read as `false`, unset variables as `0`.
#[derive(Debug, Clone, Default)]
pub struct GameFlags {
    switches: HashMap<u32, bool>,
    variables: HashMap<u32, i32>,
}

impl GameFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch(&self, id: u32) -> bool {
        self.switches.get(&id).copied().unwrap_or(false)
    }

    pub fn set_switch(&mut self, id: u32, value: bool) {
        self.switches.insert(id, value);
    }

    /// Flips a switch and returns its new value
    pub fn toggle_switch(&mut self, id: u32) -> bool {
        let value = !self.switch(id);
        self.set_switch(id, value);
        value
    }

    pub fn variable(&self, id: u32) -> i32 {
        self.variables.get(&id).copied().unwrap_or(0)
    }

    pub fn set_variable(&mut self, id: u32, value: i32) {
        self.variables.insert(id, value);
    }

    /// True if every valid condition holds
    pub fn meets(&self, conditions: &PageConditions) -> bool {
        if conditions.switch1_valid && !self.switch(conditions.switch1_id) {
            return false;
        }
        if conditions.switch2_valid && !self.switch(conditions.switch2_id) {
            return false;
        }
        if conditions.variable_valid && self.variable(conditions.variable_id) < conditions.variable_value {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_defaults() {
        let flags = GameFlags::new();
        assert!(!flags.switch(1));
        assert_eq!(flags.variable(1), 0);
    }

    #[test]
    fn test_toggle() {
        let mut flags = GameFlags::new();
        assert!(flags.toggle_switch(3));
        assert!(flags.switch(3));
        assert!(!flags.toggle_switch(3));
    }

    #[test]
    fn test_meets_conditions() {
        let mut flags = GameFlags::new();
        let conditions = PageConditions {
            switch1_valid: true,
            switch1_id: 1,
            variable_valid: true,
            variable_id: 4,
            variable_value: 10,
            ..Default::default()
        };
        assert!(flags.meets(&PageConditions::default()));
        assert!(!flags.meets(&conditions));

        flags.set_switch(1, true);
        flags.set_variable(4, 9);
        assert!(!flags.meets(&conditions));

        flags.set_variable(4, 10);
        assert!(flags.meets(&conditions));
    }
}
