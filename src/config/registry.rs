//! Settings registry
//! Resolves option names and applies typed values through descriptors

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Settings registry over a static descriptor table
#[derive(Debug)]
pub struct SettingsRegistry<T: 'static> {
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    /// All known descriptors
    #[must_use]
    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Resolve an option name
    ///
    /// Exact names and aliases win; otherwise a prefix must identify exactly
    /// one canonical name.
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let lowered = name.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(SettingError::UnknownOption(name.to_string()));
        }

        if let Some(desc) = self
            .settings
            .iter()
            .find(|d| d.name == lowered || d.aliases.iter().any(|a| *a == lowered))
        {
            return Ok(desc);
        }

        let mut candidates = self.settings.iter().filter(|d| d.name.starts_with(&lowered));
        match (candidates.next(), candidates.next()) {
            (Some(desc), None) => Ok(desc),
            (Some(first), Some(second)) => Err(SettingError::UnknownOption(format!(
                "{name} is ambiguous ({}, {}, ...)",
                first.name, second.name
            ))),
            _ => Err(SettingError::UnknownOption(name.to_string())),
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => {
                let val_lower = value.trim().to_lowercase();
                match val_lower.as_str() {
                    "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                    "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                    _ => Err(SettingError::ParseError(format!(
                        "Invalid boolean value: {value}"
                    ))),
                }
            }
            SettingType::Integer { min, max } => {
                let val = value.trim().parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
            SettingType::Text { allow_empty } => {
                if value.is_empty() && !allow_empty {
                    return Err(SettingError::ValidationError(
                        "Value must not be empty".to_string(),
                    ));
                }
                Ok(SettingValue::Text(value.to_string()))
            }
        }
    }

    /// Apply a setting by name with a raw string value
    ///
    /// Flow: resolve the name, parse the value by the descriptor's type,
    /// then hand the typed value to the setter.
    pub fn apply(&self, target: &mut T, name: &str, value: &str) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;
        let typed_value = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, typed_value)
    }
}
