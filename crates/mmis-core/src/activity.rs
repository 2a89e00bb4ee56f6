//! Activity history presentation.

use crate::models::TransactionKind;

/// Colour hint for a quantity cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityTone {
    Out,
    In,
    Neutral,
}

impl QuantityTone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Out => "text-red-600",
            Self::In => "text-green-600",
            Self::Neutral => "text-gray-700",
        }
    }
}

/// Stock leaving on request shows as negative, everything else as positive
pub fn signed_quantity(kind: &TransactionKind, quantity: i32) -> (String, QuantityTone) {
    match kind {
        TransactionKind::Request => (format!("-{}", quantity), QuantityTone::Out),
        TransactionKind::Return => (format!("+{}", quantity), QuantityTone::In),
        _ => (format!("+{}", quantity), QuantityTone::Neutral),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_quantity() {
        assert_eq!(
            signed_quantity(&TransactionKind::Request, 3),
            ("-3".to_string(), QuantityTone::Out)
        );
        assert_eq!(
            signed_quantity(&TransactionKind::Return, 2),
            ("+2".to_string(), QuantityTone::In)
        );
        let (text, tone) = signed_quantity(&TransactionKind::parse("restock"), 10);
        assert_eq!(text, "+10");
        assert_eq!(tone, QuantityTone::Neutral);
    }
}
