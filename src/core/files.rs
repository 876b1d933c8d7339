use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use crate::Result;


/// Path: ~/.config/espn-ffl/fa-export.json (platform config dir)
pub fn default_config_path() -> Option<PathBuf> {
    let base = dirs::config_dir().or_else(|| {
        dirs::home_dir().map(|mut home| {
            home.push(".config");
            home
        })
    })?;
    Some(base.join("espn-ffl").join("fa-export.json"))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write `value` as JSON indented by four spaces, creating parent directories.
pub fn write_json_pretty<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let f = fs::File::create(path)?;
    let mut writer = BufWriter::new(f);
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
