use crate::imports::*;

/// Serialization shared by vehicle files, run parameters and result curves.
/// Every deserialization path runs [`SerdeAPI::init`] so a loaded value is
/// checked the same way as one built in code.
pub trait SerdeAPI: Serialize + for<'a> Deserialize<'a> {
    const ACCEPTED_FORMATS: &'static [&'static str] = &["yaml", "yml", "json"];

    /// Checks run after deserializing
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Loads an object from a file, picking the format from its extension.
    fn from_file<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let extension = filepath
            .extension()
            .and_then(OsStr::to_str)
            .with_context(|| format!("no usable file extension on {filepath:?}"))?;
        let file = File::open(filepath).with_context(|| {
            if filepath.exists() {
                format!("could not open {filepath:?}")
            } else {
                format!("no such file: {filepath:?}")
            }
        })?;
        Self::from_reader(file, extension)
            .with_context(|| format!("could not load {filepath:?}"))
    }

    /// Renders the object as `format` text.
    fn to_str(&self, format: &str) -> anyhow::Result<String> {
        match format.trim_start_matches('.').to_lowercase().as_str() {
            "yaml" | "yml" => self.to_yaml(),
            "json" => self.to_json(),
            _ => bail!(
                "unsupported format {format:?}, expected one of {:?}",
                Self::ACCEPTED_FORMATS
            ),
        }
    }

    fn from_reader<R: std::io::Read>(rdr: R, format: &str) -> anyhow::Result<Self> {
        let mut deserialized: Self = match format.trim_start_matches('.').to_lowercase().as_str()
        {
            "yaml" | "yml" => serde_yaml::from_reader(rdr)?,
            "json" => serde_json::from_reader(rdr)?,
            _ => bail!(
                "unsupported format {format:?}, expected one of {:?}",
                Self::ACCEPTED_FORMATS
            ),
        };
        deserialized.init()?;
        Ok(deserialized)
    }

    fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self)?)
    }

    fn from_json<S: AsRef<str>>(json_str: S) -> anyhow::Result<Self> {
        let mut json_de: Self = serde_json::from_str(json_str.as_ref())?;
        json_de.init()?;
        Ok(json_de)
    }

    fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(&self)?)
    }

    fn from_yaml<S: AsRef<str>>(yaml_str: S) -> anyhow::Result<Self> {
        let mut yaml_de: Self = serde_yaml::from_str(yaml_str.as_ref())?;
        yaml_de.init()?;
        Ok(yaml_de)
    }
}
