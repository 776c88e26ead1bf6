use crate::app::Generator;
use crate::ports::{ArtifactStore, ClientFactory, EnvSource, GitPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: EnvSource, F: ClientFactory, G: GitPort, S: ArtifactStore> {
    generator: Generator<E, F>,
    git: G,
    store: S,
}

impl<E: EnvSource, F: ClientFactory, G: GitPort, S: ArtifactStore> AppContext<E, F, G, S> {
    pub fn new(generator: Generator<E, F>, git: G, store: S) -> Self {
        Self { generator, git, store }
    }

    pub fn generator(&self) -> &Generator<E, F> {
        &self.generator
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
