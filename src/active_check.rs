use crate::common::check_errors::CheckError;
use crate::common::secret::SecretResolver;
use crate::invocation::{InvocationDescriptor, build};
use crate::params::{BenchmarkParams, parse_params};
use serde_json::Value;

type ParameterParser = fn(&Value) -> Result<BenchmarkParams, CheckError>;
type CommandsFunction =
    fn(&BenchmarkParams, &dyn SecretResolver) -> Result<InvocationDescriptor, CheckError>;

/// Registration of an active check: its name plus how to turn raw rule
/// parameters into commands.
pub struct ActiveCheckConfig {
    pub name: &'static str,
    pub parameter_parser: ParameterParser,
    pub commands_function: CommandsFunction,
}

pub const FTP_BENCHMARK: ActiveCheckConfig = ActiveCheckConfig {
    name: "ftpbenchmark",
    parameter_parser: parse_params,
    commands_function: build,
};

impl ActiveCheckConfig {
    pub fn commands(
        &self,
        raw: &Value,
        resolver: &dyn SecretResolver,
    ) -> Result<Vec<InvocationDescriptor>, CheckError> {
        let params = (self.parameter_parser)(raw)?;
        let command = (self.commands_function)(&params, resolver)?;
        Ok(vec![command])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::secret::PasswordStore;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn empty_document_uses_upstream_defaults() {
        let commands = FTP_BENCHMARK
            .commands(&json!({}), &PasswordStore::default())
            .unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0].command_arguments,
            vec![
                "--port",
                "21",
                "--file-size",
                "1",
                "--download",
                "--download-count",
                "10",
                "--upload",
                "--upload-count",
                "10",
            ]
        );
    }

    #[test]
    fn document_with_stored_password() {
        let store = PasswordStore::new(HashMap::from([(
            "ftp".to_string(),
            "s3cr3t".to_string(),
        )]));
        let raw = json!({
            "host": "ftp.example.com",
            "port": 2121,
            "user": "bob",
            "password": {"stored": "ftp"},
            "mode": ["passive", "passive"],
            "path": "/bench.bin",
            "file_size": null,
            "download_benchmarking": null,
            "download_count": null,
            "upload_benchmarking": true,
            "upload_count": 2,
        });
        let commands = FTP_BENCHMARK.commands(&raw, &store).unwrap();
        assert_eq!(commands[0].service_description, "FTP benchmark");
        assert_eq!(
            commands[0].command_arguments,
            vec![
                "--host",
                "ftp.example.com",
                "--port",
                "2121",
                "--user",
                "bob",
                "--password",
                "s3cr3t",
                "--path",
                "/bench.bin",
                "--upload",
                "--upload-count",
                "2",
            ]
        );
    }

    #[test]
    fn invalid_document_is_rejected() {
        let err = FTP_BENCHMARK
            .commands(&json!({"file_size": "big"}), &PasswordStore::default())
            .unwrap_err();
        assert!(matches!(err, CheckError::InvalidParams(_)));
    }
}
