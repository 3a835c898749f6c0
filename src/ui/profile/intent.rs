use crate::ui::mvi::{BindingError, Intent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileIntent {
    Binding(ProfileBinding),
}

impl Intent for ProfileIntent {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBinding {
    Nickname(String),
}

impl ProfileBinding {
    pub fn parse(field: &str, value: &str) -> Result<Self, BindingError> {
        match field {
            "nickname" | "nick" => Ok(ProfileBinding::Nickname(value.to_string())),
            _ => Err(BindingError::UnknownField {
                field: field.to_string(),
            }),
        }
    }
}
