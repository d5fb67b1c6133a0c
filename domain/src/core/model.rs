//! Model value object representing a remote language model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generation method a model must advertise to be usable for chat
pub const GENERATE_CONTENT: &str = "generateContent";

/// Resource prefix some catalogs put in front of model names
const RESOURCE_PREFIX: &str = "models/";

/// Well-known language models (Value Object)
///
/// The remote catalog is not stable across deployments, so anything not
/// listed here is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Flash,
    Gemini15Pro,
    GeminiPro,
    Gemini10Pro,
    Gemini10ProLatest,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::GeminiPro => "gemini-pro",
            Model::Gemini10Pro => "gemini-1.0-pro",
            Model::Gemini10ProLatest => "gemini-1.0-pro-latest",
            Model::Custom(s) => s,
        }
    }

    /// Ordered identifiers tried when the catalog yields nothing usable
    pub fn fallback_models() -> Vec<Model> {
        vec![Model::GeminiPro, Model::Gemini10Pro, Model::Gemini10ProLatest]
    }

    /// Check if the name signals a fast/lightweight variant
    pub fn is_lightweight(&self) -> bool {
        self.as_str().to_lowercase().contains("flash")
    }

    /// Check if the name signals a general-purpose variant
    pub fn is_general_purpose(&self) -> bool {
        self.as_str().to_lowercase().contains("pro")
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix(RESOURCE_PREFIX).unwrap_or(name);
        Ok(match name {
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-pro" => Model::GeminiPro,
            "gemini-1.0-pro" => Model::Gemini10Pro,
            "gemini-1.0-pro-latest" => Model::Gemini10ProLatest,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

/// A catalog entry returned by a model listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub model: Model,
    pub supported_generation_methods: Vec<String>,
}

impl ModelDescriptor {
    pub fn new(model: impl Into<Model>, methods: &[&str]) -> Self {
        Self {
            model: model.into(),
            supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Whether the model can produce content for a prompt
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT)
    }

    /// Pick the preferred model from a catalog listing.
    ///
    /// The first lightweight model that supports generation wins outright;
    /// otherwise the first general-purpose one is used. Returns `None` when
    /// neither is present.
    pub fn select_preferred(catalog: &[ModelDescriptor]) -> Option<Model> {
        let mut general = None;
        for descriptor in catalog.iter().filter(|d| d.supports_generation()) {
            if descriptor.model.is_lightweight() {
                return Some(descriptor.model.clone());
            }
            if general.is_none() && descriptor.model.is_general_purpose() {
                general = Some(descriptor.model.clone());
            }
        }
        general
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in Model::fallback_models() {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_resource_prefix_is_stripped() {
        let model = Model::from("models/gemini-1.5-flash");
        assert_eq!(model, Model::Gemini15Flash);
        let custom = Model::from("models/gemini-2.0-flash-exp");
        assert_eq!(custom, Model::Custom("gemini-2.0-flash-exp".to_string()));
    }

    #[test]
    fn test_variant_detection() {
        assert!(Model::Gemini15Flash.is_lightweight());
        assert!(!Model::Gemini15Flash.is_general_purpose());
        assert!(Model::GeminiPro.is_general_purpose());
        assert!(Model::from("GEMINI-FLASH-8B").is_lightweight());
    }

    #[test]
    fn test_select_prefers_lightweight() {
        let catalog = vec![
            ModelDescriptor::new("models/gemini-1.5-pro", &[GENERATE_CONTENT]),
            ModelDescriptor::new("models/embedding-001", &["embedContent"]),
            ModelDescriptor::new("models/gemini-1.5-flash", &[GENERATE_CONTENT]),
        ];
        assert_eq!(
            ModelDescriptor::select_preferred(&catalog),
            Some(Model::Gemini15Flash)
        );
    }

    #[test]
    fn test_select_falls_back_to_first_general_purpose() {
        let catalog = vec![
            ModelDescriptor::new("models/text-bison", &[GENERATE_CONTENT]),
            ModelDescriptor::new("models/gemini-1.0-pro", &[GENERATE_CONTENT]),
            ModelDescriptor::new("models/gemini-1.5-pro", &[GENERATE_CONTENT]),
        ];
        assert_eq!(
            ModelDescriptor::select_preferred(&catalog),
            Some(Model::Gemini10Pro)
        );
    }

    #[test]
    fn test_select_ignores_models_without_generation() {
        let catalog = vec![ModelDescriptor::new(
            "models/gemini-1.5-flash",
            &["countTokens"],
        )];
        assert_eq!(ModelDescriptor::select_preferred(&catalog), None);
        assert_eq!(ModelDescriptor::select_preferred(&[]), None);
    }
}
