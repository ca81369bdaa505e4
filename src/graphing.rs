//! Metric and graph metadata for the values the benchmark reports.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    DarkGreen,
    DarkYellow,
    LightRed,
    DarkRed,
    LightOrange,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Auto,
    Strict(u8),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub symbol: &'static str,
    pub precision: Precision,
}

pub const SECONDS: Unit = Unit {
    symbol: "s",
    precision: Precision::Auto,
};

pub const COUNT: Unit = Unit {
    symbol: "",
    precision: Precision::Strict(0),
};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub title: &'static str,
    pub unit: Unit,
    pub color: Color,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub name: &'static str,
    pub title: &'static str,
    pub simple_lines: Vec<&'static str>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub metrics: Vec<Metric>,
    pub graphs: Vec<Graph>,
}

fn metric(name: &'static str, title: &'static str, unit: Unit, color: Color) -> Metric {
    Metric {
        name,
        title,
        unit,
        color,
    }
}

pub fn ftp_benchmark() -> Catalog {
    Catalog {
        metrics: vec![
            metric(
                "average_download_seconds",
                "Average seconds per download",
                SECONDS,
                Color::DarkGreen,
            ),
            metric(
                "digest_errors",
                "Corrupted files after download",
                COUNT,
                Color::DarkYellow,
            ),
            metric(
                "errors",
                "Error responses from server",
                COUNT,
                Color::LightRed,
            ),
            metric(
                "exceptions",
                "Exceptions thrown while benchmarking",
                COUNT,
                Color::DarkRed,
            ),
            metric(
                "timeouts",
                "Timeouts during file transfers",
                COUNT,
                Color::LightOrange,
            ),
        ],
        graphs: vec![Graph {
            name: "errors_combined",
            title: "Errors during benchmarking",
            simple_lines: vec!["digest_errors", "errors", "exceptions", "timeouts"],
        }],
    }
}

impl Catalog {
    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Graph lines that name no declared metric.
    pub fn undeclared_lines(&self) -> Vec<(&'static str, &'static str)> {
        self.graphs
            .iter()
            .flat_map(|graph| graph.simple_lines.iter().map(move |line| (graph.name, *line)))
            .filter(|(_, line)| self.metric(line).is_none())
            .collect()
    }
}
