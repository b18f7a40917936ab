#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    /// Create an ID from a u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::VariableId;

    #[test]
    fn variable_id_roundtrip() {
        let id = VariableId::new(7);
        assert_eq!(id.inner(), 7);
    }

    #[test]
    fn variable_ids_order_by_value() {
        assert!(VariableId::new(1) < VariableId::new(2));
    }
}
