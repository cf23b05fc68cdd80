// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: usize,
    entries: Vec<(usize, Listener)>,
}

/// Estado reactivo con sistema de notificaciones.
///
/// Los clones comparten valor y subscribers.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios; la suscripción vive lo que viva el handle
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(callback)));
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    pub fn downgrade(&self) -> WeakReactiveState<T> {
        WeakReactiveState {
            value: Rc::downgrade(&self.value),
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Notificar a todos los subscribers, de forma síncrona.
    /// Se copia la lista antes para que un callback pueda (des)suscribirse.
    fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

pub struct WeakReactiveState<T> {
    value: Weak<RefCell<T>>,
    listeners: Weak<RefCell<Listeners>>,
}

impl<T> WeakReactiveState<T> {
    pub fn upgrade(&self) -> Option<ReactiveState<T>> {
        Some(ReactiveState {
            value: self.value.upgrade()?,
            listeners: self.listeners.upgrade()?,
        })
    }
}

impl<T> Clone for WeakReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

/// Handle de suscripción: al soltarlo se da de baja el callback
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    listeners: Weak<RefCell<Listeners>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_are_notified_after_each_update() {
        let state = ReactiveState::new(0);
        let seen = Rc::new(Cell::new(-1));
        let _sub = {
            let seen = seen.clone();
            let reader = state.clone();
            state.subscribe(move || seen.set(reader.with(|v| *v)))
        };

        state.set(3);
        assert_eq!(seen.get(), 3);
        state.update(|v| *v += 1);
        assert_eq!(seen.get(), 4);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let state = ReactiveState::new(());
        let calls = Rc::new(Cell::new(0));
        let sub = {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1))
        };
        state.set(());
        drop(sub);
        state.set(());
        assert_eq!(calls.get(), 1);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(String::new());
        let other = state.clone();
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = calls.clone();
            state.subscribe(move || calls.set(calls.get() + 1))
        };
        other.set("x".to_string());
        assert_eq!(calls.get(), 1);
        assert_eq!(state.with(|v| v.clone()), "x");
        assert!(state.ptr_eq(&other));
    }

    #[test]
    fn weak_handle_does_not_keep_state_alive() {
        let state = ReactiveState::new(1);
        let weak = state.downgrade();
        assert!(weak.upgrade().is_some());
        drop(state);
        assert!(weak.upgrade().is_none());
    }
}
