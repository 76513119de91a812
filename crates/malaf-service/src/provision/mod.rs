//! Folder provisioning: naming rules, the single-student provisioner,
//! the batch orchestrator, and the per-teacher batch lock.

pub mod batch;
pub mod lock;
pub mod naming;
pub mod provisioner;

pub use batch::BatchProvisionService;
pub use lock::BatchLock;
pub use provisioner::StudentProvisioner;
