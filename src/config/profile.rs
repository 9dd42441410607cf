use std::path::Path;

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

const PROMPT_KEY: &str = "prompt";
const PERMISSIONS_KEY: &str = "permissions";
const COLOR_KEY: &str = "color";

/// Optional session settings loaded from a YAML file. Absent keys keep the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub prompt: Option<String>,
    pub permissions: Option<String>,
    pub color: Option<bool>,
}

impl Profile {
    pub async fn read(path: &Path) -> Result<Self, ProfileError> {
        debug!("Opening profile: {}", path.display());
        let bytes = compio::fs::read(path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read profile: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    fn from_mapping(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, ProfileError> {
        let mut profile = Profile::default();

        for (key, value) in top_level {
            let Yaml::Value(Scalar::String(key)) = key else {
                debug!("Skipping non-string profile key: {:?}", key);
                continue;
            };

            match &**key {
                PROMPT_KEY => {
                    let prompt = value.as_str().context(InvalidFieldSnafu {
                        field: PROMPT_KEY,
                        expected: "a string",
                    })?;
                    profile.prompt = Some(prompt.to_string());
                }
                PERMISSIONS_KEY => {
                    let permissions = permissions_from_yaml(value).context(InvalidFieldSnafu {
                        field: PERMISSIONS_KEY,
                        expected: "a string or an integer",
                    })?;
                    profile.permissions = Some(permissions);
                }
                COLOR_KEY => {
                    let Yaml::Value(Scalar::Boolean(color)) = value else {
                        return InvalidFieldSnafu {
                            field: COLOR_KEY,
                            expected: "a boolean",
                        }
                        .fail();
                    };
                    profile.color = Some(*color);
                }
                other => debug!("Ignoring unknown profile key '{}'", other),
            }
        }

        Ok(profile)
    }
}

// `permissions: 755` loads as an integer, `permissions: "rwxr-xr-x"` as a string.
fn permissions_from_yaml(value: &Yaml) -> Option<String> {
    match value {
        Yaml::Value(Scalar::String(permissions)) => Some(permissions.to_string()),
        Yaml::Value(Scalar::Integer(permissions)) => Some(permissions.to_string()),
        _ => None,
    }
}

impl TryFrom<&str> for Profile {
    type Error = ProfileError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedProfileSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        Self::from_mapping(top_level)
    }
}

#[derive(Debug, Snafu)]
pub enum ProfileError {
    #[snafu(display("Failed to read the profile: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("The profile {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the profile"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted profile"))]
    MalformedProfile,
    #[snafu(display("Top level of the profile should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Profile field '{}' should be {}", field, expected))]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}
