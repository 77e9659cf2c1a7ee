use std::io::Write;

use clap::ValueEnum;
use wordcross::PlacementMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One line per word and orientation, followed by its placements
    Text,
    /// A list of `{ anchor, placements }` objects
    Json,
}

pub fn write_placement_map(
    mut writer: impl Write,
    map: &PlacementMap,
    format: Format,
) -> anyhow::Result<()> {
    match format {
        Format::Text => write!(writer, "{}", map)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, map)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
