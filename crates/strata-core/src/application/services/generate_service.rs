//! Generate Service - main application orchestrator.
//!
//! Coordinates one `create` invocation:
//! 1. Resolve kind + name into a [`GenerationPlan`] (pure, may fail)
//! 2. Render every target through the template port
//! 3. Ensure directories and write files through the filesystem port
//!
//! Nothing touches the filesystem until steps 1 and 2 have succeeded, so an
//! unknown kind or invalid name never creates a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{ArtifactKind, ArtifactName, GenerationPlan, PathResolver, TemplateKind, bootstrap_layout},
    error::StrataResult,
};

/// A file written by [`GenerateService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub template: TemplateKind,
    /// A file already existed at `path` and was replaced.
    pub overwritten: bool,
}

/// Outcome of a `create` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub plan: GenerationPlan,
    pub files: Vec<WrittenFile>,
}

/// Outcome of an `init` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Create the bootstrap directory skeleton under `root`.  Idempotent.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn init(&self, root: &Path) -> StrataResult<InitReport> {
        let mut report = InitReport::default();

        for dir in bootstrap_layout()? {
            let path = dir.under(root);
            if self.filesystem.exists(&path) {
                report.existing.push(path);
                continue;
            }
            self.filesystem.create_dir_all(&path)?;
            debug!(path = %path.display(), "created directory");
            report.created.push(path);
        }

        info!(
            created = report.created.len(),
            existing = report.existing.len(),
            "Bootstrap layout ready"
        );
        Ok(report)
    }

    /// Resolve what `create` would write, without writing anything.
    pub fn plan(&self, kind: &str, name: &str) -> StrataResult<GenerationPlan> {
        let kind: ArtifactKind = kind.parse()?;
        let name = ArtifactName::parse(name)?;
        Ok(PathResolver::plan(kind, name)?)
    }

    /// Resolve, render and write one artifact under `root`.
    ///
    /// Existing files are overwritten.  There is no rollback: companions
    /// written before a failing primary stay on disk.
    #[instrument(skip_all, fields(kind = %kind, name = %name, root = %root.display()))]
    pub fn create(&self, kind: &str, name: &str, root: &Path) -> StrataResult<GenerationReport> {
        let plan = self.plan(kind, name)?;
        self.execute(plan, root)
    }

    /// Render and write a previously resolved plan.
    pub fn execute(&self, plan: GenerationPlan, root: &Path) -> StrataResult<GenerationReport> {
        let normalized = plan.name.normalized();

        let rendered = plan
            .targets()
            .map(|target| {
                let content = self.renderer.render(target.template, &normalized)?;
                Ok((target, content))
            })
            .collect::<StrataResult<Vec<_>>>()?;

        let mut files = Vec::with_capacity(rendered.len());
        for (target, content) in rendered {
            let dir = target.directory.under(root);
            self.filesystem.create_dir_all(&dir)?;

            let path = dir.join(&target.file_name);
            let overwritten = self.filesystem.exists(&path);
            self.filesystem.write_file(&path, &content)?;
            info!(path = %path.display(), overwritten, "wrote file");

            files.push(WrittenFile {
                path,
                template: target.template,
                overwritten,
            });
        }

        Ok(GenerationReport { plan, files })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::predicate::*;

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::output::{MockFilesystem, MockTemplateRenderer},
        },
        domain::DomainError,
        error::StrataError,
    };

    fn echo_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|template, name| Ok(format!("{template}:{name}")));
        renderer
    }

    #[test]
    fn unknown_kind_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_exists().never();

        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let service = GenerateService::new(Box::new(renderer), Box::new(fs));
        let err = service.create("foo", "Bar", Path::new("/project")).unwrap_err();

        assert!(matches!(
            err,
            StrataError::Domain(DomainError::UnknownKind { ref kind }) if kind == "foo"
        ));
    }

    #[test]
    fn invalid_name_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(echo_renderer()), Box::new(fs));
        assert!(service.create("entity", "..", Path::new("/project")).is_err());
    }

    #[test]
    fn service_written_under_command_branch() {
        let root = Path::new("/project");
        let expected_dir = root.join("application/command/create/service");
        let expected_file = expected_dir.join("CreateOrderCommand.java");

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(expected_dir.clone()))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .with(eq(expected_file.clone()), eq("service:CreateOrderCommand"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(echo_renderer()), Box::new(fs));
        let report = service.create("service", "createOrderCommand", root).unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].path, expected_file);
        assert!(!report.files[0].overwritten);
    }

    #[test]
    fn existing_file_is_reported_as_overwritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(echo_renderer()), Box::new(fs));
        let report = service.create("entity", "Order", Path::new("/p")).unwrap();
        assert!(report.files[0].overwritten);
    }

    #[test]
    fn primary_failure_keeps_companions() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file().times(3).returning(|path, _| {
            if path.ends_with("Global.java") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let service = GenerateService::new(Box::new(echo_renderer()), Box::new(fs));
        let err = service
            .create("exception-advice", "Global", Path::new("/p"))
            .unwrap_err();
        assert!(matches!(
            err,
            StrataError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn render_failure_happens_before_any_write() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|_, _| {
            Err(ApplicationError::RenderingFailed {
                reason: "missing template".into(),
            }
            .into())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(Box::new(renderer), Box::new(fs));
        assert!(service.create("vo", "Money", Path::new("/p")).is_err());
    }

    #[test]
    fn init_skips_existing_directories() {
        let root = Path::new("/p");
        let existing = root.join("domain");

        let mut fs = MockFilesystem::new();
        let probe = existing.clone();
        fs.expect_exists().returning(move |p| p == probe.as_path());
        fs.expect_create_dir_all()
            .withf(move |p| p != existing.as_path())
            .returning(|_| Ok(()));

        let service = GenerateService::new(Box::new(echo_renderer()), Box::new(fs));
        let report = service.init(root).unwrap();

        assert_eq!(report.existing, vec![root.join("domain")]);
        assert_eq!(report.created.len(), crate::domain::BOOTSTRAP_DIRECTORIES.len() - 1);
    }

    #[test]
    fn plan_does_not_need_adapters() {
        let service = GenerateService::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(MockFilesystem::new()),
        );
        let plan = service.plan("query", "getOrder").unwrap();
        assert_eq!(plan.primary.to_string(), "presentation/web/GetOrder/dto/query/getOrder.java");
    }
}
