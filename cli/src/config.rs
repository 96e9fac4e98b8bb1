//! YAML command configuration.
//!
//! A configuration file carries the explicit side of a merge: command
//! metadata, argument overrides and, for callables that cannot declare one
//! in code, the parameter list.
//!
//! ```yaml
//! name: greet
//! help: Say hello
//! kind: auto
//! exclude: [debug]
//! signature: "title, name, count=1"
//! arguments:
//!   title:
//!     help: how to address the person
//!     choices: [Mr., Ms., Dr.]
//!   count:
//!     type: int
//!     short: c
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use docargs_core::{ArgumentSpec, HelpFormatter, KindPolicy, ParamInfo, Signature, parse_signature};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::{CommandOptions, Error};

/// Parameter list given either as `"a, b=3"` text or as a list of entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignatureConfig {
    Text(String),
    Params(Vec<ParamInfo>),
}

impl SignatureConfig {
    pub fn to_signature(&self) -> Signature {
        match self {
            SignatureConfig::Text(text) => parse_signature(text),
            SignatureConfig::Params(params) => Signature {
                params: params.clone(),
            },
        }
    }
}

/// Explicit settings for one command, loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandConfig {
    pub name: Option<String>,
    pub help: Option<String>,
    pub description: Option<String>,
    pub formatter: Option<HelpFormatter>,
    pub kind: KindPolicy,
    pub exclude: Vec<String>,
    pub signature: Option<SignatureConfig>,
    /// Argument overrides in file order; each key becomes the argument name.
    #[serde(deserialize_with = "ordered_arguments")]
    pub arguments: Vec<ArgumentSpec>,
}

impl CommandConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn signature(&self) -> Option<Signature> {
        self.signature.as_ref().map(SignatureConfig::to_signature)
    }

    pub fn into_options(self) -> CommandOptions {
        CommandOptions {
            name: self.name,
            help: self.help,
            description: self.description,
            formatter: self.formatter,
            arguments: self.arguments,
            excludes: self.exclude,
            kind: self.kind,
        }
    }
}

fn ordered_arguments<'de, D>(deserializer: D) -> Result<Vec<ArgumentSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedArguments;

    impl<'de> Visitor<'de> for OrderedArguments {
        type Value = Vec<ArgumentSpec>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of argument names to argument settings")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut specs = Vec::new();
            while let Some((name, spec)) = map.next_entry::<String, Option<ArgumentSpec>>()? {
                let mut spec = spec.unwrap_or_default();
                spec.name = docargs_core::normalize_name(&name).to_string();
                specs.push(spec);
            }
            Ok(specs)
        }
    }

    deserializer.deserialize_any(OrderedArguments)
}
