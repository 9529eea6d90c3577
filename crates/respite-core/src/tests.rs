#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::async_state::{AsyncAction, AsyncReducer, AsyncResource, AsyncState, Status};
    use crate::dispatch::SafeDispatch;
    use crate::effects::on_unmount;
    use crate::promise::Promise;
    use crate::providers::Providers;
    use crate::scope::Scope;
    use crate::signal::signal;
    use crate::state::Store;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Creature {
        name: String,
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscribe_and_unsubscribe() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let key = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        sig.set(1);
        sig.set(2);
        sig.unsubscribe(key);
        sig.set(3);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_scope_dispose_runs_disposers_and_drops_liveness() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let liveness = scope.liveness();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(liveness.is_alive());
        scope.dispose();
        assert!(*cleaned_up.borrow());
        assert!(!liveness.is_alive());
    }

    #[test]
    fn test_scope_drop_is_a_cleanup_path() {
        let liveness = {
            let scope = Scope::new();
            scope.liveness()
        };
        assert!(!liveness.is_alive());
    }

    #[test]
    fn test_child_scopes_dispose_before_parent() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let parent = Scope::new();
        let child = parent.child();
        parent.add_disposer({
            let order = order.clone();
            move || order.borrow_mut().push("parent")
        });
        child.add_disposer({
            let order = order.clone();
            move || order.borrow_mut().push("child")
        });

        parent.dispose();
        assert_eq!(*order.borrow(), vec!["child", "parent"]);
    }

    #[test]
    fn test_effect_cleanup_runs_on_teardown() {
        let unmounted = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        scope.effect({
            let unmounted = unmounted.clone();
            || on_unmount(move || *unmounted.borrow_mut() = true)
        });

        assert!(!*unmounted.borrow());
        scope.dispose();
        assert!(*unmounted.borrow());
    }

    #[test]
    fn test_dispose_runs_at_most_once() {
        let runs = Rc::new(RefCell::new(0));
        let dispose = on_unmount({
            let runs = runs.clone();
            move || *runs.borrow_mut() += 1
        });

        dispose.run();
        dispose.run();
        assert_eq!(*runs.borrow(), 1);
    }

    #[test]
    fn test_safe_dispatch_forwards_while_alive() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let scope = Scope::new();

        let raw: Rc<dyn Fn(i32)> = Rc::new({
            let seen = seen.clone();
            move |a| seen.borrow_mut().push(a)
        });
        let dispatch = SafeDispatch::new(raw, scope.liveness());

        dispatch.dispatch(1);
        dispatch.dispatch(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_safe_dispatch_drops_after_teardown() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let scope = Scope::new();

        let raw: Rc<dyn Fn(i32)> = Rc::new({
            let seen = seen.clone();
            move |a| seen.borrow_mut().push(a)
        });
        let dispatch = SafeDispatch::new(raw, scope.liveness());

        dispatch.dispatch(1);
        scope.dispose();
        dispatch.dispatch(2); // no panic, no effect
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_safe_dispatch_clones_share_identity() {
        let scope = Scope::new();
        let raw: Rc<dyn Fn(i32)> = Rc::new(|_| {});
        let dispatch = SafeDispatch::new(raw, scope.liveness());
        let other = dispatch.clone();
        assert!(dispatch.same_dispatcher(&other));
    }

    #[test]
    fn test_pending_is_observable_before_run_returns() {
        let scope = Scope::new();
        let lookup = AsyncResource::<i32, String>::new(&scope);

        let seen = Rc::new(RefCell::new(Vec::new()));
        lookup.subscribe({
            let seen = seen.clone();
            move |state| seen.borrow_mut().push(state.status())
        });

        let op = Promise::pending();
        lookup.run(&op);

        // Nothing has settled, yet the machine is already pending.
        assert_eq!(*seen.borrow(), vec![Status::Pending]);
        assert_eq!(lookup.state(), AsyncState::Pending);
    }

    #[test]
    fn test_late_settle_after_teardown_is_dropped() {
        let scope = Scope::new();
        let lookup = AsyncResource::<i32, String>::new(&scope);

        let op = Promise::pending();
        lookup.run(&op);
        assert_eq!(lookup.state(), AsyncState::Pending);

        scope.dispose();
        op.resolve(5); // must neither panic nor transition
        assert_eq!(lookup.state(), AsyncState::Pending);
    }

    #[test]
    fn test_resolved_operation() {
        let scope = Scope::new();
        let lookup = AsyncResource::<Creature, String>::new(&scope);

        lookup.run(&Promise::resolved(Creature {
            name: "Pikachu".to_string(),
        }));

        assert_eq!(
            lookup.state(),
            AsyncState::Resolved(Creature {
                name: "Pikachu".to_string()
            })
        );
        assert!(lookup.state().error().is_none());
    }

    #[test]
    fn test_rejected_operation() {
        let scope = Scope::new();
        let lookup = AsyncResource::<Creature, String>::new(&scope);

        lookup.run(&Promise::rejected("not found".to_string()));

        assert_eq!(lookup.state(), AsyncState::Rejected("not found".to_string()));
        assert!(lookup.state().data().is_none());
    }

    #[test]
    fn test_set_data_is_idempotent() {
        let scope = Scope::new();
        let lookup = AsyncResource::<i32, String>::new(&scope);

        lookup.set_data(9);
        assert_eq!(lookup.state(), AsyncState::Resolved(9));

        lookup.set_data(9);
        assert_eq!(lookup.state(), AsyncState::Resolved(9));
    }

    #[test]
    fn test_initial_state_is_configurable() {
        let scope = Scope::new();
        let lookup = AsyncResource::<i32, String>::with_initial(&scope, AsyncState::Pending);
        assert_eq!(lookup.status(), Status::Pending);
    }

    #[test]
    fn test_rerun_restarts_at_pending() {
        let scope = Scope::new();
        let lookup = AsyncResource::<i32, String>::new(&scope);

        lookup.run(&Promise::resolved(1));
        assert_eq!(lookup.state(), AsyncState::Resolved(1));

        let op = Promise::pending();
        lookup.run(&op);
        assert_eq!(lookup.state(), AsyncState::Pending);
    }

    #[test]
    fn test_overlapping_runs_last_settle_wins() {
        let scope = Scope::new();
        let lookup = AsyncResource::<i32, String>::new(&scope);

        let first = Promise::pending();
        let second = Promise::pending();
        lookup.run(&first);
        lookup.run(&second);

        first.resolve(1);
        assert_eq!(lookup.state(), AsyncState::Resolved(1));

        // Settle order decides, not invocation order.
        second.resolve(2);
        assert_eq!(lookup.state(), AsyncState::Resolved(2));
    }

    #[test]
    #[should_panic(expected = "unhandled action `resolve` in state `idle`")]
    fn test_settle_without_begin_is_fatal() {
        let store = Store::<AsyncReducer<i32, String>>::new();
        store.dispatch(AsyncAction::Resolve(1));
    }

    #[test]
    fn test_promise_settles_at_most_once() {
        let op = Promise::<i32, String>::pending();
        op.resolve(1);
        op.resolve(2);
        op.reject("late".to_string());
        assert_eq!(op.outcome(), Some(Ok(1)));
    }

    #[test]
    fn test_promise_continuation_after_settle_runs_immediately() {
        let op = Promise::<i32, String>::pending();
        op.resolve(4);

        let seen = Rc::new(RefCell::new(None));
        op.on_settle({
            let seen = seen.clone();
            move |outcome| *seen.borrow_mut() = Some(outcome.clone())
        });
        assert_eq!(*seen.borrow(), Some(Ok(4)));
    }

    #[test]
    fn test_promise_continuations_run_in_registration_order() {
        let op = Promise::<i32, String>::pending();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = order.clone();
            op.on_settle(move |_| order.borrow_mut().push(tag));
        }
        op.resolve(0);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_providers_get_returns_provided_value() {
        #[derive(Debug, PartialEq)]
        struct TextScale(f32);

        let providers = Providers::new().provide(TextScale(1.5));
        assert_eq!(*providers.get::<TextScale>().unwrap(), TextScale(1.5));
    }

    #[test]
    fn test_providers_miss_names_the_type() {
        #[derive(Debug)]
        struct TextScale(#[allow(dead_code)] f32);

        let providers = Providers::new();
        let err = providers.get::<TextScale>().unwrap_err();
        assert!(err.to_string().contains("TextScale"));
    }

    #[test]
    fn test_providers_overlay_shadows_without_touching_parent() {
        #[derive(Debug, PartialEq)]
        struct Zoom(u32);

        let parent = Providers::new().provide(Zoom(1));
        let child = parent.overlay().provide(Zoom(2));

        assert_eq!(*parent.get::<Zoom>().unwrap(), Zoom(1));
        assert_eq!(*child.get::<Zoom>().unwrap(), Zoom(2));
    }
}
