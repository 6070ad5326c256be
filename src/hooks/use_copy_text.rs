//! use_copy_text hook - copy-to-clipboard state for a component
//!
//! Binds a [`CopyController`] to Dioxus signals:
//! - Status and error signals updated on every applied transition
//! - Reset to unset whenever the target changes
//! - Auto-copy when the target is set, `auto` is on and `disabled` is off

use dioxus::prelude::*;
use std::rc::Rc;

use crate::clipboard::{
    ChangeStatus, ClipboardError, ClipboardPlatform, CopyController, CopyState, CopyTarget,
    CopyTextOptions, WebPlatform,
};

/// Return type for the use_copy_text hook
#[derive(Clone)]
pub struct UseCopyText {
    /// Status of the latest attempt, `None` while unset
    pub status: Signal<Option<ChangeStatus>>,
    /// Error of the latest failed attempt
    pub error: Signal<Option<ClipboardError>>,
    /// Start a copy of the given target
    pub copy: EventHandler<CopyTarget>,
    /// Underlying controller, for callers that need to await a copy
    pub controller: Rc<CopyController>,
}

impl UseCopyText {
    pub fn state(&self) -> CopyState {
        CopyState {
            status: *self.status.read(),
            error: self.error.read().clone(),
        }
    }
}

impl PartialEq for UseCopyText {
    fn eq(&self, other: &Self) -> bool {
        // Handlers are not compared
        *self.status.read() == *other.status.read()
            && *self.error.read() == *other.error.read()
            && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

/// Hook for copying text to the clipboard from a component
///
/// # Example
/// ```rust,ignore
/// let copier = use_copy_text(
///     CopyTextOptions::new(note_id.clone())
///         .methods(vec![CopyMethod::Clipboard, CopyMethod::ExecCommand]),
/// );
///
/// button {
///     onclick: move |_| copier.copy.call(CopyTarget::from(note_id.clone())),
///     if *copier.status.read() == Some(ChangeStatus::Done) { "Copied!" } else { "Copy" }
/// }
/// ```
pub fn use_copy_text(options: CopyTextOptions) -> UseCopyText {
    use_copy_text_with_platform(options, || Rc::new(WebPlatform) as Rc<dyn ClipboardPlatform>)
}

/// Same as [`use_copy_text`] with an explicit platform
///
/// `platform` is only called on the first render.
pub fn use_copy_text_with_platform(
    options: CopyTextOptions,
    platform: impl FnOnce() -> Rc<dyn ClipboardPlatform>,
) -> UseCopyText {
    let mut status = use_signal(|| None::<ChangeStatus>);
    let mut error = use_signal(|| None::<ClipboardError>);

    let initial_methods = options.methods.clone();
    let controller = use_hook(move || {
        let controller = CopyController::new(platform(), initial_methods);
        controller.subscribe(move |state: &CopyState| {
            status.set(state.status);
            error.set(state.error.clone());
        });
        Rc::new(controller)
    });

    controller.set_methods(options.methods.clone());

    // Target changed: back to unset, stale attempts are invalidated
    let reset_controller = controller.clone();
    use_effect(use_reactive(&options.target, move |_target| {
        reset_controller.reset();
    }));

    let auto_target = options.auto_target().cloned();
    let auto_controller = controller.clone();
    use_effect(use_reactive(&auto_target, move |auto_target| {
        let Some(target) = auto_target else {
            log::debug!("Auto copy skipped");
            return;
        };
        let controller = auto_controller.clone();
        spawn(async move {
            controller.copy(target).await;
        });
    }));

    let copy_controller = controller.clone();
    let copy = use_callback(move |target: CopyTarget| {
        let controller = copy_controller.clone();
        spawn(async move {
            controller.copy(target).await;
        });
    });

    UseCopyText {
        status,
        error,
        copy,
        controller,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::platform::fake::FakePlatform;
    use crate::clipboard::CopyMethod;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use futures::FutureExt;
    use std::cell::RefCell;

    type Handle = Rc<RefCell<Option<(UseCopyText, Signal<Option<CopyTarget>>)>>>;

    #[derive(Props, Clone)]
    struct HarnessProps {
        options: CopyTextOptions,
        platform: Rc<FakePlatform>,
        handle: Handle,
    }

    impl PartialEq for HarnessProps {
        fn eq(&self, other: &Self) -> bool {
            self.options == other.options && Rc::ptr_eq(&self.handle, &other.handle)
        }
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        let initial_target = props.options.target.clone();
        let target = use_signal(move || initial_target);
        let options = CopyTextOptions {
            target: target.read().clone(),
            ..props.options.clone()
        };
        let platform = props.platform.clone();
        let copier = use_copy_text_with_platform(options, move || {
            platform as Rc<dyn ClipboardPlatform>
        });
        *props.handle.borrow_mut() = Some((copier, target));
        rsx! {}
    }

    fn mount(options: CopyTextOptions, platform: &Rc<FakePlatform>) -> (VirtualDom, Handle) {
        let handle: Handle = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                options,
                platform: platform.clone(),
                handle: handle.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom);
        (dom, handle)
    }

    /// Run effects, spawned copies and re-renders until nothing is ready
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            let _ = dom.wait_for_work().now_or_never();
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn state(dom: &VirtualDom, handle: &Handle) -> CopyState {
        let copier = handle.borrow().as_ref().map(|(c, _)| c.clone()).unwrap();
        dom.in_runtime(|| copier.state())
    }

    #[test]
    fn test_auto_copy_runs_once() {
        let platform = Rc::new(FakePlatform::capable());
        let (dom, handle) = mount(CopyTextOptions::new("npub1auto").auto(true), &platform);

        assert_eq!(platform.calls(), vec!["probe", "write"]);
        assert_eq!(platform.writes.borrow().len(), 1);
        assert_eq!(state(&dom, &handle).status, Some(ChangeStatus::Done));
    }

    #[test]
    fn test_disabled_suppresses_auto_copy() {
        let platform = Rc::new(FakePlatform::capable());
        let (dom, handle) = mount(
            CopyTextOptions::new("npub1auto").auto(true).disabled(true),
            &platform,
        );

        assert!(platform.calls().is_empty());
        assert!(state(&dom, &handle).is_unset());
    }

    #[test]
    fn test_no_auto_copy_without_auto() {
        let platform = Rc::new(FakePlatform::capable());
        let (dom, handle) = mount(CopyTextOptions::new("npub1manual"), &platform);

        assert!(platform.calls().is_empty());
        assert!(state(&dom, &handle).is_unset());
    }

    #[test]
    fn test_target_change_resets_pending_copy() {
        let platform = Rc::new(FakePlatform::capable());
        let release = platform.hold_next_write();
        let options = CopyTextOptions::new("first").methods(vec![CopyMethod::Clipboard]);
        let (mut dom, handle) = mount(options, &platform);
        let (copier, mut target) = handle.borrow().clone().unwrap();

        // Explicit copy left hanging in the clipboard write
        let mut pool = LocalPool::new();
        let controller = copier.controller.clone();
        pool.spawner()
            .spawn_local(async move { controller.copy(CopyTarget::from("first")).await })
            .unwrap();
        dom.in_runtime(|| pool.run_until_stalled());
        assert_eq!(state(&dom, &handle).status, Some(ChangeStatus::Loading));

        dom.in_runtime(|| target.set(Some(CopyTarget::from("second"))));
        settle(&mut dom);

        let current = state(&dom, &handle);
        assert!(current.is_unset());
        assert!(current.error.is_none());
        drop(release);
    }
}
