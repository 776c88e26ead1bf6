mod fake_client;
mod fake_git;
mod map_env;
mod memory_store;

pub use fake_client::{FakeClient, FakeClientFactory};
pub use fake_git::FakeGit;
pub use map_env::MapEnv;
pub use memory_store::MemoryArtifactStore;

use crate::app::{AppContext, Generator};
use crate::domain::{ProviderKind, Settings};

pub type TestContext = AppContext<MapEnv, FakeClientFactory, FakeGit, MemoryArtifactStore>;

/// Context wired to the local daemon kind with fakes for every port.
pub fn test_context(git: FakeGit, store: MemoryArtifactStore, client: FakeClient) -> TestContext {
    let generator = Generator::new(
        Settings::default(),
        ProviderKind::LocalDaemon,
        MapEnv::new(),
        FakeClientFactory::new(client),
    )
    .unwrap();
    AppContext::new(generator, git, store)
}
