//! Configuration form of the FTP benchmark rule.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Applications,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    String,
    Integer {
        prefill: Option<i64>,
    },
    Password,
    CascadingSingleChoice {
        prefill: &'static str,
        choices: Vec<Choice>,
    },
    BooleanChoice,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DictElement {
    pub name: &'static str,
    pub required: bool,
    pub title: &'static str,
    pub help_text: &'static str,
    pub widget: Widget,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub topic: Topic,
    pub help_text: &'static str,
    pub form_title: &'static str,
    pub form_help_text: &'static str,
    pub elements: Vec<DictElement>,
}

fn element(
    name: &'static str,
    title: &'static str,
    help_text: &'static str,
    widget: Widget,
) -> DictElement {
    DictElement {
        name,
        required: true,
        title,
        help_text,
        widget,
    }
}

pub fn ftp_benchmark() -> RuleSpec {
    let mode_choices = vec![
        Choice {
            name: "passive",
            title: "Passive",
            value: "passive",
        },
        Choice {
            name: "active",
            title: "Active",
            value: "active",
        },
    ];
    RuleSpec {
        name: "ftpbenchmark",
        title: "FTP benchmark",
        topic: Topic::Applications,
        help_text: "This is the help text of the FTP benchmark check module",
        form_title: "FTP Benchmark",
        form_help_text: "This rule is used to set up the FTP benchmark Special agent.",
        elements: vec![
            element(
                "host",
                "FTP server host/ip",
                "The address of the FTP server to connect to",
                Widget::String,
            ),
            element(
                "port",
                "FTP server port",
                "The port of the FTP server to connect to",
                Widget::Integer { prefill: Some(21) },
            ),
            element(
                "user",
                "Username",
                "Username for login to FTP server",
                Widget::String,
            ),
            element(
                "password",
                "Password",
                "Password for login to FTP server",
                Widget::Password,
            ),
            element(
                "mode",
                "Transfer mode",
                "FTP transfer mode",
                Widget::CascadingSingleChoice {
                    prefill: "passive",
                    choices: mode_choices,
                },
            ),
            element(
                "path",
                "Path",
                "Path to file used for testing",
                Widget::String,
            ),
            element(
                "file_size",
                "File size",
                "The size file used for benchmarking",
                Widget::Integer {
                    prefill: Some(1024),
                },
            ),
            element(
                "download_benchmarking",
                "Download benchmarking",
                "Enables download benchmarking",
                Widget::BooleanChoice,
            ),
            element(
                "download_count",
                "Download count",
                "How many times to download a file in one execution",
                Widget::Integer {
                    prefill: Some(1024),
                },
            ),
            element(
                "upload_benchmarking",
                "Upload benchmarking",
                "Enables upload benchmarking",
                Widget::BooleanChoice,
            ),
            element(
                "upload_count",
                "Upload count",
                "How many times to upload a file in one execution",
                Widget::Integer {
                    prefill: Some(1024),
                },
            ),
        ],
    }
}

impl RuleSpec {
    /// Parameter document holding only the prefilled values of a fresh form.
    pub fn prefilled_params(&self) -> Value {
        let mut params = Map::new();
        for element in &self.elements {
            match &element.widget {
                Widget::Integer {
                    prefill: Some(value),
                } => {
                    params.insert(element.name.to_string(), Value::from(*value));
                }
                Widget::CascadingSingleChoice { prefill, choices } => {
                    if let Some(choice) = choices.iter().find(|c| c.name == *prefill) {
                        params.insert(
                            element.name.to_string(),
                            Value::from(vec![choice.name, choice.value]),
                        );
                    }
                }
                _ => {}
            }
        }
        Value::Object(params)
    }
}
