//! Default wiring of a decorator from settings.

use std::sync::Arc;

use super::cache::DeserializerCache;
use super::decorator::AvroMessageDecorator;
use super::resolver::EndpointResolver;
use super::store::ConfigurationStore;
use super::ui_dispatcher::ThreadDispatcher;
use crate::config::DecoratorSettings;
use crate::domain::ports::{DeserializerFactory, EndpointPrompter, HostShell};
use crate::error::DecoratorResult;
use crate::infrastructure::PropertiesFileRepository;

pub const UI_THREAD_NAME: &str = "avro-decorator-ui";

/// A ready decorator plus the dispatcher its prompts run on.
///
/// Keep the dispatcher to `flush` pending prompts or `shutdown` at exit.
pub struct DecoratorRuntime {
    pub decorator: AvroMessageDecorator,
    pub dispatcher: Arc<ThreadDispatcher>,
}

/// Build a decorator reading endpoints from `settings.properties_path`.
///
/// The store is loaded here, so a broken file is reported through `shell`
/// before the first message is decorated.
pub fn bootstrap(
    settings: &DecoratorSettings,
    prompter: Arc<dyn EndpointPrompter>,
    shell: Arc<dyn HostShell>,
    factory: Arc<dyn DeserializerFactory>,
) -> DecoratorResult<DecoratorRuntime> {
    let repository = Arc::new(PropertiesFileRepository::with_path(
        settings.properties_path.clone(),
    ));
    let store = Arc::new(ConfigurationStore::load(repository, Arc::clone(&shell)));
    let dispatcher = Arc::new(ThreadDispatcher::spawn(UI_THREAD_NAME)?);

    tracing::debug!(
        path = %settings.properties_path.display(),
        interactive = settings.interactive,
        "decorator ready"
    );

    let resolver = EndpointResolver::new(
        Arc::clone(&store),
        prompter,
        dispatcher.clone(),
        Arc::clone(&shell),
    );
    let decorator =
        AvroMessageDecorator::new(store, resolver, DeserializerCache::new(factory), shell);

    Ok(DecoratorRuntime {
        decorator,
        dispatcher,
    })
}
