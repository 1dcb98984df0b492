use super::{Config, Descriptor, Package};

/// Fluent construction of packages and their configs.
///
/// ```
/// use figx_pm::PackageBuilder;
///
/// let foo = PackageBuilder::new("foo", "1.2.3")
///     .config("default").include("bar", "4.5.6", "default").include_config("debug").end()
///     .config("debug").end()
///     .build();
/// assert_eq!(foo.config("default").unwrap().includes().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    package: Package,
}

impl PackageBuilder {
    /// Start building `name/version`
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: Package::new(name, version),
        }
    }

    /// Start a config; call [`ConfigBuilder::end`] to return here
    pub fn config(self, name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            parent: self,
            config: Config::new(name),
        }
    }

    /// Add an already built config
    pub fn add_config(mut self, config: Config) -> Self {
        self.package.add_config(config);
        self
    }

    /// Build the package
    pub fn build(self) -> Package {
        self.package
    }
}

/// Builder for one config of a [`PackageBuilder`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    parent: PackageBuilder,
    config: Config,
}

impl ConfigBuilder {
    /// Include a config of another (or the same) package
    pub fn include(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
        config: impl Into<String>,
    ) -> Self {
        self.config.push_include(Descriptor::new(name, version, config));
        self
    }

    /// Include an arbitrary descriptor
    pub fn include_descriptor(mut self, descriptor: Descriptor) -> Self {
        self.config.push_include(descriptor);
        self
    }

    /// Include another config of the package being built
    pub fn include_config(mut self, config: impl Into<String>) -> Self {
        let descriptor = self.parent.package.descriptor(config);
        self.config.push_include(descriptor);
        self
    }

    /// Finish this config and return to the package builder
    pub fn end(self) -> PackageBuilder {
        self.parent.add_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_includes_in_declared_order() {
        let foo = PackageBuilder::new("foo", "1.2.3")
            .config("default")
            .include("baz", "7.8.9", "default")
            .include("bar", "4.5.6", "default")
            .end()
            .build();

        let includes = foo.config("default").unwrap().includes();
        assert_eq!(
            includes,
            &[
                Descriptor::new("baz", "7.8.9", "default"),
                Descriptor::new("bar", "4.5.6", "default"),
            ]
        );
    }

    #[test]
    fn test_builder_include_config_refers_to_own_package() {
        let foo = PackageBuilder::new("foo", "1.2.3")
            .config("default")
            .include_config("debug")
            .end()
            .config("debug")
            .end()
            .build();

        assert_eq!(
            foo.config("default").unwrap().includes(),
            &[Descriptor::new("foo", "1.2.3", "debug")]
        );
        assert!(foo.config("debug").unwrap().includes().is_empty());
    }

    #[test]
    fn test_builder_include_descriptor_keeps_mixed_order() {
        let parsed: Descriptor = "util/0.0.0".parse().unwrap();
        let foo = PackageBuilder::new("foo", "1.2.3")
            .config("default")
            .include("bar", "4.5.6", "default")
            .include_descriptor(parsed)
            .include_config("debug")
            .end()
            .build();

        assert_eq!(
            foo.config("default").unwrap().includes(),
            &[
                Descriptor::new("bar", "4.5.6", "default"),
                Descriptor::new("util", "0.0.0", "default"),
                Descriptor::new("foo", "1.2.3", "debug"),
            ]
        );
    }

    #[test]
    fn test_builder_empty_package() {
        let foo = PackageBuilder::new("foo", "1.2.3").build();
        assert_eq!(foo.name(), "foo");
        assert_eq!(foo.version(), "1.2.3");
        assert_eq!(foo.configs().count(), 0);
    }
}
