//! Live component instances and their lifecycle hooks.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lifecycle transitions of a rendered view, driven by the hosting renderer.
///
/// The renderer sequences transitions per instance as
/// mount → \[deactivate → activate\]* → unmount; this crate only observes
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStage {
	/// Shown again after having been kept alive in the background.
	Activated,
	/// Kept alive but hidden.
	Deactivated,
	/// Destroyed.
	Unmounted,
}

impl fmt::Display for LifecycleStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LifecycleStage::Activated => write!(f, "activated"),
			LifecycleStage::Deactivated => write!(f, "deactivated"),
			LifecycleStage::Unmounted => write!(f, "unmounted"),
		}
	}
}

/// Identifier of an installed lifecycle hook, used to detach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

type HookFn = Arc<dyn Fn() + Send + Sync>;

struct HookEntry {
	id: HookId,
	stage: LifecycleStage,
	hook: HookFn,
}

/// The live rendered unit for one route record slot.
///
/// Carries id-addressable lifecycle hooks; the hosting renderer calls
/// [`ComponentInstance::emit`] as the view transitions.
pub struct ComponentInstance {
	name: String,
	hooks: RwLock<Vec<HookEntry>>,
	next_hook_id: AtomicU64,
}

impl ComponentInstance {
	/// Creates an instance named for debugging.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			hooks: RwLock::new(Vec::new()),
			next_hook_id: AtomicU64::new(0),
		}
	}

	/// Returns the instance name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Installs a hook for `stage` and returns its id.
	pub fn add_hook<F>(&self, stage: LifecycleStage, hook: F) -> HookId
	where
		F: Fn() + Send + Sync + 'static,
	{
		let id = HookId(self.next_hook_id.fetch_add(1, Ordering::Relaxed));
		self.hooks.write().push(HookEntry {
			id,
			stage,
			hook: Arc::new(hook),
		});
		id
	}

	/// Detaches a hook. Returns whether it was still installed.
	pub fn remove_hook(&self, id: HookId) -> bool {
		let mut hooks = self.hooks.write();
		let before = hooks.len();
		hooks.retain(|entry| entry.id != id);
		hooks.len() < before
	}

	/// Number of installed hooks, across all stages.
	pub fn hook_count(&self) -> usize {
		self.hooks.read().len()
	}

	/// Runs the hooks installed for `stage`, in installation order.
	///
	/// Hooks run synchronously within the renderer's lifecycle turn. The
	/// snapshot taken up front keeps a hook free to detach hooks (including
	/// itself) while running.
	pub fn emit(&self, stage: LifecycleStage) {
		let snapshot: Vec<HookFn> = self
			.hooks
			.read()
			.iter()
			.filter(|entry| entry.stage == stage)
			.map(|entry| Arc::clone(&entry.hook))
			.collect();
		for hook in snapshot {
			hook();
		}
	}
}

impl fmt::Debug for ComponentInstance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentInstance")
			.field("name", &self.name)
			.field("hooks", &self.hooks.read().len())
			.finish()
	}
}
