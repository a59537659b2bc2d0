use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
pub mod error;
pub mod merge;
pub mod table;

use error::{MergeError, MergeResult};
use table::Table;

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// Column holding the series key of a row.
pub const SERIES_COLUMN: &str = "resolver";
/// Column holding the shared x-axis label of a row.
pub const TIME_COLUMN: &str = "ts";

pub const COLORS: [&str; 9] = [
    "#77aadd", "#00ddff", "#44bb99", "#bbcc33", "#aaaa00", "#eedd88", "#ee8866", "#ffaabb",
    "#dddddd",
];

pub const COLORS_ALPHA: [&str; 9] = [
    "#77aadd99", "#00ddff99", "#44bb9999", "#bbcc3399", "#aaaa0099", "#eedd8899", "#ee886699",
    "#ffaabb99", "#dddddd99",
];

/// One data sample of a series: column name to number or raw text,
/// the time label included among the fields.
pub type Point = Map<String, Value>;

/// One labeled line of the chart, with its chartjs styling fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
    pub stroke_color: String,
    pub fill_color: String,
    pub filled: bool,
    pub interpolation_mode: String,
    pub curve_tension: f64,
}

impl Series {
    /// New empty series; the colors are placeholders until the next restyle.
    pub fn new(label: &str) -> Series {
        Series {
            label: String::from(label),
            points: Vec::new(),
            stroke_color: String::from(COLORS[COLORS.len() - 1]),
            fill_color: String::from(COLORS_ALPHA[COLORS_ALPHA.len() - 1]),
            filled: false,
            interpolation_mode: String::from("monotone"),
            curve_tension: 0.4,
        }
    }
}

/// The main struct for the accumulated chart document:
/// the shared x-axis labels and one series per distinct series key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl Document {
    pub fn new() -> Document {
        Document {
            labels: Vec::new(),
            series: Vec::new(),
        }
    }

    /// Load the accumulated document from json.
    /// A missing or empty file yields an empty document,
    /// a non-empty file that does not parse is a DocumentParse error.
    pub fn from_json_file(path: &Path) -> MergeResult<Document> {
        if !path.is_file() {
            info!("document {} not found, starting empty", path.display());
            return Ok(Document::new());
        }
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            info!("document {} is empty, starting empty", path.display());
            return Ok(Document::new());
        }
        serde_json::from_str(&raw).map_err(|e| MergeError::DocumentParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write the document as pretty json (2-space indent), replacing the file.
    pub fn to_json_file(&self, path: &Path) -> MergeResult<()> {
        let file = File::create(path)?;
        let mut buf = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut buf, self)?;
        buf.flush()?;
        Ok(())
    }

    /// Fold a parsed batch into the document.
    /// Unseen time labels append after the existing ones and unseen series
    /// keys after the existing series, both in first-seen order; every row
    /// becomes one point on its series. The whole series set is restyled
    /// afterwards.
    pub fn merge(&mut self, table: &Table) -> MergeResult<()> {
        let time_col = table.column(TIME_COLUMN)?;
        let series_col = table.column(SERIES_COLUMN)?;
        for row in table.rows.iter() {
            let time_label = &row[time_col];
            if !self.labels.iter().any(|l| l == time_label) {
                self.labels.push(time_label.clone());
            }
            let key = &row[series_col];
            let at = match self.series.iter().position(|s| &s.label == key) {
                Some(at) => at,
                None => {
                    self.series.push(Series::new(key));
                    self.series.len() - 1
                }
            };
            let mut point = Point::new();
            for (name, cell) in table.columns.iter().zip(row.iter()) {
                if name == SERIES_COLUMN {
                    continue;
                }
                point.insert(name.clone(), coerce_cell(cell));
            }
            self.series[at].points.push(point);
        }
        self.restyle();
        Ok(())
    }

    /// Reassign stroke and fill colors to every series by its position,
    /// wrapping around once the palette runs out.
    pub fn restyle(&mut self) {
        if self.series.len() > COLORS.len() {
            warn!(
                "{} series for a palette of {}, colors will repeat",
                self.series.len(),
                COLORS.len()
            );
        }
        for (i, series) in self.series.iter_mut().enumerate() {
            series.stroke_color = String::from(COLORS[i % COLORS.len()]);
            series.fill_color = String::from(COLORS_ALPHA[i % COLORS_ALPHA.len()]);
        }
    }
}

/// Coerce a raw cell for storage in a point: an unsigned digit-only cell
/// becomes a number, everything else (signs, decimal points, exponents)
/// stays text.
pub fn coerce_cell(cell: &str) -> Value {
    if !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(n) = cell.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(String::from(cell))
}

/// Read the raw batch text from a named file, or from stdin when no path
/// is given. A named path must be an existing file.
pub fn load_raw(path: Option<&Path>) -> MergeResult<String> {
    match path {
        Some(p) => {
            if !p.is_file() {
                return Err(MergeError::InputNotFound(p.to_path_buf()));
            }
            Ok(std::fs::read_to_string(p)?)
        }
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
