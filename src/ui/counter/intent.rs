use crate::ui::mvi::{BindingError, Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,
    /// Increment after a one second pause.
    DelayedIncrementRequested,
    /// The pause requested by `DelayedIncrementRequested` elapsed.
    DelayedIncrementResolved,
    /// Direct assignment of a bindable field.
    Binding(CounterBinding),
    /// Look up a fact about the current count.
    FactRequested,
    /// Lookup finished. Carries either the fact or a displayable error.
    FactResolved(String),
}

impl Intent for CounterIntent {}

/// Bindable counter fields together with their new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterBinding {
    TimerEnabled(bool),
    Memo(String),
}

impl CounterBinding {
    /// Build a binding from a field name and raw value.
    ///
    /// Accepts both `is_timer_enabled` and the shorter `timer`.
    pub fn parse(field: &str, value: &str) -> Result<Self, BindingError> {
        match field {
            "is_timer_enabled" | "timer" => parse_toggle(value)
                .map(CounterBinding::TimerEnabled)
                .ok_or_else(|| BindingError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    expected: "on/off or true/false",
                }),
            "memo" => Ok(CounterBinding::Memo(value.to_string())),
            _ => Err(BindingError::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}

fn parse_toggle(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timer_accepts_common_spellings() {
        assert_eq!(
            CounterBinding::parse("timer", "on"),
            Ok(CounterBinding::TimerEnabled(true))
        );
        assert_eq!(
            CounterBinding::parse("is_timer_enabled", "False"),
            Ok(CounterBinding::TimerEnabled(false))
        );
    }

    #[test]
    fn parse_memo_keeps_value_verbatim() {
        assert_eq!(
            CounterBinding::parse("memo", "  buy milk "),
            Ok(CounterBinding::Memo("  buy milk ".into()))
        );
    }

    #[test]
    fn parse_rejects_bad_toggle() {
        let err = CounterBinding::parse("timer", "maybe").unwrap_err();
        assert!(matches!(err, BindingError::InvalidValue { .. }));
    }

    #[test]
    fn parse_rejects_unknown_field() {
        let err = CounterBinding::parse("count", "3").unwrap_err();
        assert_eq!(
            err,
            BindingError::UnknownField {
                field: "count".into()
            }
        );
    }
}
