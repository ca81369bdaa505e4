use crate::common::check_errors::CheckError;
use crate::common::secret::SecretResolver;
use crate::params::BenchmarkParams;
use log::debug;
use serde::Serialize;
use std::fmt;

pub const SERVICE_DESCRIPTION: &str = "FTP benchmark";

const REDACTED: &str = "******";

/// Command line for one run of the benchmark executable.
#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct InvocationDescriptor {
    pub service_description: String,
    pub command_arguments: Vec<String>,
    // indices of secret tokens in `command_arguments`
    #[serde(skip)]
    secret_positions: Vec<usize>,
}

impl InvocationDescriptor {
    /// Copy with every secret token masked, safe to log or print.
    pub fn redacted(&self) -> InvocationDescriptor {
        let mut command_arguments = self.command_arguments.clone();
        for &pos in &self.secret_positions {
            command_arguments[pos] = REDACTED.to_string();
        }
        InvocationDescriptor {
            service_description: self.service_description.clone(),
            command_arguments,
            secret_positions: vec![],
        }
    }
}

impl fmt::Debug for InvocationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationDescriptor")
            .field("service_description", &self.service_description)
            .field("command_arguments", &self.redacted().command_arguments)
            .finish()
    }
}

/// Translate validated parameters into the benchmark command line.
///
/// Arguments follow the field order of [`BenchmarkParams`]. `--download` and
/// `--upload` are emitted whenever the flag is set at all, `false` included.
pub fn build(
    params: &BenchmarkParams,
    resolver: &dyn SecretResolver,
) -> Result<InvocationDescriptor, CheckError> {
    let mut args: Vec<String> = vec![];
    let mut secret_positions = vec![];

    if let Some(host) = &params.host {
        args.extend(["--host".to_string(), host.clone()]);
    }
    if let Some(port) = params.port {
        args.extend(["--port".to_string(), port.to_string()]);
    }
    if let Some(user) = &params.user {
        args.extend(["--user".to_string(), user.clone()]);
    }
    if let Some(password) = &params.password {
        args.push("--password".to_string());
        secret_positions.push(args.len());
        args.push(resolver.resolve(password)?);
    }
    if params.mode.as_ref().is_some_and(|mode| mode.is_active()) {
        args.push("--active".to_string());
    }
    if let Some(path) = &params.path {
        args.extend(["--path".to_string(), path.clone()]);
    }
    if let Some(file_size) = params.file_size {
        args.extend(["--file-size".to_string(), file_size.to_string()]);
    }
    if params.download_benchmarking.is_some() {
        args.push("--download".to_string());
    }
    if let Some(count) = params.download_count {
        args.extend(["--download-count".to_string(), count.to_string()]);
    }
    if params.upload_benchmarking.is_some() {
        args.push("--upload".to_string());
    }
    if let Some(count) = params.upload_count {
        args.extend(["--upload-count".to_string(), count.to_string()]);
    }

    let descriptor = InvocationDescriptor {
        service_description: SERVICE_DESCRIPTION.to_string(),
        command_arguments: args,
        secret_positions,
    };
    debug!("built invocation {:?}", descriptor);
    Ok(descriptor)
}
