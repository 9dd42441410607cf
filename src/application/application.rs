use std::io;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::config::{Profile, ProfileError};
use crate::filesystem::Tree;
use crate::shell::{DEFAULT_PROMPT, SessionError, Shell, ShellSettings};

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let profile = match &runtime_config.profile {
            Some(path) => Profile::read(path).await.context(ProfileLoadSnafu)?,
            None => Profile::default(),
        };
        debug!("Loaded profile: {:?}", profile);

        let color = runtime_config.color.resolve(profile.color);
        if color {
            colored::control::set_override(true);
        }
        debug!("Colored output: {}", color);

        let tree = match profile.permissions {
            Some(permissions) => Tree::new().with_default_permissions(permissions),
            None => Tree::new(),
        };
        let settings = ShellSettings {
            prompt: profile.prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            color,
        };

        info!("Starting session");
        let mut shell = Shell::new(tree, settings);
        shell
            .run(io::stdin().lock(), io::stdout().lock())
            .context(ShellSessionSnafu)?;
        info!("Session ended with {} nodes in the tree", shell.tree().node_count());

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the profile"))]
    ProfileLoadError { source: ProfileError },
    #[snafu(display("Critical failure encountered during the shell session"))]
    ShellSessionError { source: SessionError },
}
