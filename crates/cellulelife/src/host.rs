//! Host shell: publishes configuration, installs the content filter, loads
//! the simulation module and hands control to it exactly once.
//!
//! `Uninitialized -> ConfigurationSet -> ModuleLoading -> ModuleRunning`,
//! with `LoadFailed` as the terminal state of a failed load. There is no way
//! back to an earlier phase.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use thiserror::Error;

use crate::config::EndpointConfig;
use crate::filter::ContentFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HostPhase {
    Uninitialized = 0,
    ConfigurationSet = 1,
    ModuleLoading = 2,
    ModuleRunning = 3,
    LoadFailed = 4,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("module artifact unavailable: {0}")]
    Unavailable(String),
    #[error("module failed to instantiate: {0}")]
    Instantiate(String),
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("cannot {operation} while the host is {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: HostPhase,
    },
    #[error("a content filter is already installed")]
    FilterAlreadyInstalled,
    #[error("simulation module failed to load")]
    Load(#[from] LoadError),
}

/// Everything the module may read from the host. Built from values that are
/// already published, so holding one proves configuration came first.
#[derive(Clone)]
pub struct HostContext {
    config: Rc<EndpointConfig>,
    filter: Option<Rc<dyn ContentFilter>>,
}

impl HostContext {
    pub fn new(config: Rc<EndpointConfig>, filter: Option<Rc<dyn ContentFilter>>) -> Self {
        Self { config, filter }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub fn filter(&self) -> Option<&Rc<dyn ContentFilter>> {
        self.filter.as_ref()
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("config", &self.config)
            .field("filter_installed", &self.filter.is_some())
            .finish()
    }
}

/// A unit the host can start. `run_app` consumes the module, so it can only
/// ever be entered once.
pub trait SimulationModule {
    fn run_app(self, ctx: HostContext);
}

/// Resolves a module, possibly asynchronously.
pub trait ModuleLoader {
    type Module: SimulationModule;

    fn load(self) -> impl Future<Output = Result<Self::Module, LoadError>>;
}

/// Loader for a module linked into the same binary. Resolves immediately.
pub struct StaticLoader<M> {
    module: M,
}

impl<M> StaticLoader<M> {
    pub fn new(module: M) -> Self {
        Self { module }
    }
}

impl<M: SimulationModule> ModuleLoader for StaticLoader<M> {
    type Module = M;

    fn load(self) -> impl Future<Output = Result<M, LoadError>> {
        std::future::ready(Ok(self.module))
    }
}

pub struct Host {
    phase: HostPhase,
    config: Option<Rc<EndpointConfig>>,
    filter: Option<Rc<dyn ContentFilter>>,
}

impl Host {
    pub fn new() -> Self {
        Self {
            phase: HostPhase::Uninitialized,
            config: None,
            filter: None,
        }
    }

    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    fn invalid(&self, operation: &'static str) -> HostError {
        HostError::InvalidPhase {
            operation,
            phase: self.phase,
        }
    }

    /// Publish the endpoint configuration. Absent endpoints are accepted as
    /// they are.
    pub fn initialize(&mut self, config: EndpointConfig) -> Result<Rc<EndpointConfig>, HostError> {
        if self.phase != HostPhase::Uninitialized {
            return Err(self.invalid("initialize configuration"));
        }
        log::info!(
            "endpoint configuration set (submit: {}, high scores: {})",
            config.submit_result().is_some(),
            config.get_high_scores().is_some()
        );
        let config = Rc::new(config);
        self.config = Some(Rc::clone(&config));
        self.phase = HostPhase::ConfigurationSet;
        Ok(config)
    }

    /// Install the shared content filter. Must happen before the load starts.
    pub fn install_filter<F: ContentFilter + 'static>(
        &mut self,
        filter: F,
    ) -> Result<Rc<dyn ContentFilter>, HostError> {
        if !matches!(self.phase, HostPhase::Uninitialized | HostPhase::ConfigurationSet) {
            return Err(self.invalid("install a content filter"));
        }
        if self.filter.is_some() {
            return Err(HostError::FilterAlreadyInstalled);
        }
        let filter: Rc<dyn ContentFilter> = Rc::new(filter);
        self.filter = Some(Rc::clone(&filter));
        Ok(filter)
    }

    /// The context a module receives, once configuration is published.
    pub fn context(&self) -> Option<HostContext> {
        let config = self.config.as_ref()?;
        Some(HostContext::new(Rc::clone(config), self.filter.clone()))
    }

    /// Load the module and start it. On success `run_app` has been called
    /// exactly once when this returns. On failure the host stays in
    /// `LoadFailed` and the error is returned for the caller to report.
    pub async fn launch<L: ModuleLoader>(&mut self, loader: L) -> Result<(), HostError> {
        if self.phase != HostPhase::ConfigurationSet {
            return Err(self.invalid("launch the module"));
        }
        let ctx = self
            .context()
            .ok_or_else(|| self.invalid("launch the module"))?;

        self.phase = HostPhase::ModuleLoading;
        log::info!("loading simulation module");

        match loader.load().await {
            Ok(module) => {
                self.phase = HostPhase::ModuleRunning;
                log::info!("simulation module loaded, starting it");
                module.run_app(ctx);
                Ok(())
            }
            Err(err) => {
                self.phase = HostPhase::LoadFailed;
                Err(HostError::Load(err))
            }
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::WordFilter;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    type Events = Rc<RefCell<Vec<String>>>;

    /// Records what it saw when the host started it.
    struct RecordingModule {
        events: Events,
        seen: Rc<RefCell<Option<HostContext>>>,
    }

    impl SimulationModule for RecordingModule {
        fn run_app(self, ctx: HostContext) {
            self.events.borrow_mut().push(format!(
                "run_app submit={:?} scores={:?}",
                ctx.config().submit_result(),
                ctx.config().get_high_scores()
            ));
            *self.seen.borrow_mut() = Some(ctx);
        }
    }

    struct RecordingLoader {
        events: Events,
        module: Option<RecordingModule>,
    }

    impl ModuleLoader for RecordingLoader {
        type Module = RecordingModule;

        fn load(self) -> impl Future<Output = Result<RecordingModule, LoadError>> {
            self.events.borrow_mut().push("load".to_string());
            let result = self
                .module
                .ok_or_else(|| LoadError::Unavailable("cellulelife.wasm: 404".into()));
            async move { result }
        }
    }

    /// A load that never resolves.
    struct PendingLoader;

    impl ModuleLoader for PendingLoader {
        type Module = RecordingModule;

        fn load(self) -> impl Future<Output = Result<RecordingModule, LoadError>> {
            std::future::pending()
        }
    }

    fn recording() -> (Events, Rc<RefCell<Option<HostContext>>>, RecordingModule) {
        let events: Events = Rc::default();
        let seen = Rc::new(RefCell::new(None));
        let module = RecordingModule {
            events: Rc::clone(&events),
            seen: Rc::clone(&seen),
        };
        (events, seen, module)
    }

    fn example_config() -> EndpointConfig {
        EndpointConfig::new(
            Some("https://api.example.com/submit".into()),
            Some("https://api.example.com/scores".into()),
        )
    }

    #[test]
    fn starts_in_uninitialized_without_context() {
        let host = Host::new();
        assert_eq!(host.phase(), HostPhase::Uninitialized);
        assert!(host.context().is_none());
    }

    #[test]
    fn configured_endpoints_reach_the_module_verbatim() {
        let (events, seen, module) = recording();
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        assert_eq!(host.phase(), HostPhase::ConfigurationSet);

        let loader = RecordingLoader {
            events: Rc::clone(&events),
            module: Some(module),
        };
        block_on(host.launch(loader)).unwrap();

        let seen = seen.borrow();
        let ctx = seen.as_ref().unwrap();
        assert_eq!(ctx.config().submit_result(), Some("https://api.example.com/submit"));
        assert_eq!(ctx.config().get_high_scores(), Some("https://api.example.com/scores"));
        assert_eq!(host.phase(), HostPhase::ModuleRunning);
    }

    #[test]
    fn unset_endpoints_are_absent_and_not_an_error() {
        let (events, seen, module) = recording();
        let mut host = Host::new();
        let config = host.initialize(EndpointConfig::default()).unwrap();
        assert_eq!(config.submit_result(), None);
        assert_eq!(config.get_high_scores(), None);

        block_on(host.launch(RecordingLoader {
            events,
            module: Some(module),
        }))
        .unwrap();
        let seen = seen.borrow();
        assert!(seen.as_ref().unwrap().config().is_offline());
    }

    #[test]
    fn configuration_precedes_load_which_precedes_run_app() {
        let (events, _seen, module) = recording();
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        block_on(host.launch(RecordingLoader {
            events: Rc::clone(&events),
            module: Some(module),
        }))
        .unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                "load".to_string(),
                "run_app submit=Some(\"https://api.example.com/submit\") scores=Some(\"https://api.example.com/scores\")".to_string(),
            ]
        );
    }

    #[test]
    fn launch_requires_configuration() {
        let (events, _seen, module) = recording();
        let mut host = Host::new();
        let err = block_on(host.launch(RecordingLoader {
            events: Rc::clone(&events),
            module: Some(module),
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            HostError::InvalidPhase {
                phase: HostPhase::Uninitialized,
                ..
            }
        ));
        assert!(events.borrow().is_empty(), "nothing may be loaded before configuration");
    }

    #[test]
    fn failed_load_never_calls_run_app() {
        let (events, seen, _module) = recording();
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        let err = block_on(host.launch(RecordingLoader {
            events: Rc::clone(&events),
            module: None,
        }))
        .unwrap_err();

        assert!(matches!(err, HostError::Load(LoadError::Unavailable(_))));
        assert_eq!(host.phase(), HostPhase::LoadFailed);
        assert_eq!(*events.borrow(), vec!["load".to_string()]);
        assert!(seen.borrow().is_none());
    }

    #[test]
    fn failed_load_is_terminal() {
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        let (events, seen, module) = recording();
        let _ = block_on(host.launch(RecordingLoader {
            events: Rc::clone(&events),
            module: None,
        }));

        let err = block_on(host.launch(RecordingLoader {
            events,
            module: Some(module),
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            HostError::InvalidPhase {
                phase: HostPhase::LoadFailed,
                ..
            }
        ));
        assert!(seen.borrow().is_none());
    }

    #[test]
    fn run_app_is_invoked_at_most_once() {
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        let (events, _seen, first) = recording();
        let (_, _, second) = recording();

        block_on(host.launch(RecordingLoader {
            events: Rc::clone(&events),
            module: Some(first),
        }))
        .unwrap();
        let err = block_on(host.launch(RecordingLoader {
            events: Rc::clone(&events),
            module: Some(second),
        }))
        .unwrap_err();

        assert!(matches!(err, HostError::InvalidPhase { .. }));
        let runs = events
            .borrow()
            .iter()
            .filter(|e| e.starts_with("run_app"))
            .count();
        assert_eq!(runs, 1);
    }

    #[test]
    fn installed_filter_is_the_instance_the_module_sees() {
        let (events, seen, module) = recording();
        let mut host = Host::new();
        let installed = host.install_filter(WordFilter::default()).unwrap();
        host.initialize(example_config()).unwrap();

        block_on(host.launch(RecordingLoader {
            events,
            module: Some(module),
        }))
        .unwrap();

        let seen = seen.borrow();
        let filter = seen.as_ref().unwrap().filter().unwrap();
        assert!(Rc::ptr_eq(filter, &installed));
        assert!(filter.contains_profanity("shit"));

        // Still the same instance for the rest of the page's lifetime.
        let later = host.context().unwrap();
        assert!(Rc::ptr_eq(later.filter().unwrap(), &installed));
    }

    #[test]
    fn filter_is_optional() {
        let (events, seen, module) = recording();
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        block_on(host.launch(RecordingLoader {
            events,
            module: Some(module),
        }))
        .unwrap();
        assert!(seen.borrow().as_ref().unwrap().filter().is_none());
    }

    #[test]
    fn filter_cannot_be_replaced_or_installed_late() {
        let mut host = Host::new();
        host.install_filter(WordFilter::default()).unwrap();
        assert!(matches!(
            host.install_filter(WordFilter::default()),
            Err(HostError::FilterAlreadyInstalled)
        ));

        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        block_on(host.launch(StaticLoader::new(recording().2))).unwrap();
        assert!(matches!(
            host.install_filter(WordFilter::default()),
            Err(HostError::InvalidPhase {
                phase: HostPhase::ModuleRunning,
                ..
            })
        ));
    }

    #[test]
    fn configuration_is_set_only_once() {
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        let err = host.initialize(EndpointConfig::default()).unwrap_err();
        assert!(matches!(err, HostError::InvalidPhase { .. }));
        assert_eq!(
            host.context().unwrap().config().submit_result(),
            Some("https://api.example.com/submit")
        );
    }

    #[test]
    fn unresolved_load_never_starts_the_module() {
        let mut host = Host::new();
        host.initialize(example_config()).unwrap();
        let outcome = host.launch(PendingLoader).now_or_never();
        assert!(outcome.is_none());
        assert_eq!(host.phase(), HostPhase::ModuleLoading);
    }

    #[test]
    fn static_loader_resolves_immediately() {
        let (_events, seen, module) = recording();
        let mut host = Host::new();
        host.initialize(EndpointConfig::default()).unwrap();
        let outcome = host.launch(StaticLoader::new(module)).now_or_never();
        assert!(matches!(outcome, Some(Ok(()))));
        assert!(seen.borrow().is_some());
    }

    #[test]
    fn errors_read_well() {
        let err = HostError::InvalidPhase {
            operation: "launch the module",
            phase: HostPhase::LoadFailed,
        };
        assert_eq!(err.to_string(), "cannot launch the module while the host is LoadFailed");
        let err = HostError::from(LoadError::Instantiate("bad magic".into()));
        assert_eq!(err.to_string(), "simulation module failed to load");
    }
}
