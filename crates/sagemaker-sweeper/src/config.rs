//! Run configuration
//!
//! Built once at the entry point, validated, and then passed unchanged to
//! the sweeper. Defaults are applied here and nowhere else.

use crate::error::ConfigError;
use sagemaker_sweeper_common::defaults::{APP_TYPE_WILDCARD, DEFAULT_TOGGLE, env};
use sagemaker_sweeper_common::{AppTypeSelector, Category, parse_flag, parse_toggle};
use tracing::warn;

/// Per-category enable switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryToggles {
    pub studio_apps: bool,
    pub notebook_instances: bool,
    pub model_endpoints: bool,
    pub mlflow_servers: bool,
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self {
            studio_apps: DEFAULT_TOGGLE,
            notebook_instances: DEFAULT_TOGGLE,
            model_endpoints: DEFAULT_TOGGLE,
            mlflow_servers: DEFAULT_TOGGLE,
        }
    }
}

impl CategoryToggles {
    /// Check whether a category is swept
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::StudioApp => self.studio_apps,
            Category::NotebookInstance => self.notebook_instances,
            Category::ModelEndpoint => self.model_endpoints,
            Category::MlflowServer => self.mlflow_servers,
        }
    }

    fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::StudioApp => self.studio_apps = enabled,
            Category::NotebookInstance => self.notebook_instances = enabled,
            Category::ModelEndpoint => self.model_endpoints = enabled,
            Category::MlflowServer => self.mlflow_servers = enabled,
        }
    }
}

/// Configuration for one sweep
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Which categories are swept
    pub toggles: CategoryToggles,
    /// Studio app types eligible for deletion
    pub app_type: AppTypeSelector,
    /// Region override (provider default when `None`)
    pub region: Option<String>,
    /// Log what would be stopped without stopping it
    pub dry_run: bool,
}

impl RunConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Missing app type and toggles are warned about and defaulted; region
    /// and dry-run are optional and silently defaulted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_type = match lookup(env::STUDIO_APP_TYPE) {
            Some(value) => AppTypeSelector::parse(&value),
            None => {
                warn!(
                    variable = env::STUDIO_APP_TYPE,
                    fallback = APP_TYPE_WILDCARD,
                    "Environment variable not set, using default"
                );
                AppTypeSelector::Any
            }
        };

        let mut toggles = CategoryToggles::default();
        for category in Category::ALL {
            let variable = category.toggle_env_var();
            match lookup(variable) {
                Some(value) => toggles.set(category, parse_flag(&value)),
                None => warn!(
                    variable,
                    fallback = DEFAULT_TOGGLE,
                    "Environment variable not set, using default"
                ),
            }
        }

        let region = lookup(env::REGION)
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        let dry_run = parse_toggle(lookup(env::DRY_RUN).as_deref());

        let config = Self {
            toggles,
            app_type,
            region,
            dry_run,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a sweep meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_type.is_empty() {
            return Err(ConfigError::EmptyAppType);
        }
        if self.region.as_deref().is_some_and(|r| r.trim().is_empty()) {
            return Err(ConfigError::EmptyRegion);
        }
        Ok(())
    }

    /// Categories this run will sweep, in sweep order
    pub fn enabled_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|c| self.toggles.is_enabled(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_stops_everything() {
        let config = RunConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.app_type, AppTypeSelector::Any);
        assert_eq!(config.enabled_categories().count(), 4);
        assert!(config.region.is_none());
        assert!(!config.dry_run);
    }

    #[test]
    fn test_toggles_parsed_from_text() {
        let config = RunConfig::from_lookup(lookup_from(&[
            (env::MODEL_ENDPOINT_STOP, "false"),
            (env::STUDIO_APP_STOP, "T"),
            (env::NOTEBOOK_INSTANCE_STOP, "0"),
            (env::MLFLOW_SERVER_STOP, ""),
        ]))
        .unwrap();

        assert!(!config.toggles.model_endpoints);
        assert!(config.toggles.studio_apps);
        assert!(!config.toggles.notebook_instances);
        assert!(!config.toggles.mlflow_servers);
        assert_eq!(
            config.enabled_categories().collect::<Vec<_>>(),
            vec![Category::StudioApp]
        );
    }

    #[test]
    fn test_app_type_and_optional_values() {
        let config = RunConfig::from_lookup(lookup_from(&[
            (env::STUDIO_APP_TYPE, "KernelGateway"),
            (env::REGION, "eu-central-1"),
            (env::DRY_RUN, "yes"),
        ]))
        .unwrap();

        assert_eq!(
            config.app_type,
            AppTypeSelector::Only("KernelGateway".to_string())
        );
        assert_eq!(config.region.as_deref(), Some("eu-central-1"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_blank_region_means_default() {
        let config = RunConfig::from_lookup(lookup_from(&[(env::REGION, "  ")])).unwrap();
        assert!(config.region.is_none());
    }

    #[test]
    fn test_empty_app_type_rejected() {
        let err = RunConfig::from_lookup(lookup_from(&[(env::STUDIO_APP_TYPE, "")])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyAppType);
    }

    #[test]
    fn test_validate_rejects_empty_region() {
        let config = RunConfig {
            region: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyRegion));
    }
}
