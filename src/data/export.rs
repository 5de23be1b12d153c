//! Saving the currently displayed charts as JSON.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::chart::ChartSpec;
use crate::error::{Error, Result};
use crate::events::OutputId;

/// One JSON object with a key per output slot (`"scatter"`, `"x-time-series"`, ...).
pub fn charts_to_value(outputs: &BTreeMap<OutputId, ChartSpec>) -> Result<Value> {
    let mut map = Map::new();
    for (id, spec) in outputs {
        map.insert(id.label().to_string(), serde_json::to_value(spec)?);
    }
    Ok(Value::Object(map))
}

pub fn write_charts_json<W: Write>(
    mut w: W,
    outputs: &BTreeMap<OutputId, ChartSpec>,
) -> Result<()> {
    let value = charts_to_value(outputs)?;
    serde_json::to_writer_pretty(&mut w, &value)?;
    writeln!(w).map_err(|e| Error::Io("<writer>".into(), e))?;
    Ok(())
}

pub fn save_charts_json<P: AsRef<Path>>(
    path: P,
    outputs: &BTreeMap<OutputId, ChartSpec>,
) -> Result<()> {
    let path = path.as_ref();
    let f = std::fs::File::create(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    write_charts_json(std::io::BufWriter::new(f), outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Axis, ChartKind};
    use crate::data::selection::Scale;

    fn empty_scatter() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Scatter,
            traces: Vec::new(),
            x_axis: Axis::new(Some("new_cases".into()), Scale::Log),
            y_axis: Axis::new(None, Scale::Linear),
            annotation: None,
            margins: None,
            height: None,
        }
    }

    #[test]
    fn keys_follow_output_labels() {
        let mut outputs = BTreeMap::new();
        outputs.insert(OutputId::Scatter, empty_scatter());
        let v = charts_to_value(&outputs).unwrap();
        assert!(v.get("scatter").is_some());
        assert!(v.get("overview").is_none());
    }

    #[test]
    fn writes_pretty_json_with_trailing_newline() {
        let mut outputs = BTreeMap::new();
        outputs.insert(OutputId::Scatter, empty_scatter());
        let mut buf = Vec::new();
        write_charts_json(&mut buf, &outputs).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, charts_to_value(&outputs).unwrap());
    }
}
