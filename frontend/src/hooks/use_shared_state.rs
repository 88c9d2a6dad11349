use std::cell::{Ref, RefCell};
use std::rc::Rc;

use yew::prelude::*;

/// State read and written from async callbacks.
///
/// `use_state` handles capture a snapshot, so a callback created before a
/// change keeps seeing the old value. The cell here is shared by every clone,
/// and each `update` schedules a re-render of the owning component.
pub struct SharedState<T> {
    cell: Rc<RefCell<T>>,
    rerender: UseForceUpdateHandle,
}

// Manual impl: cloning the handle must not require `T: Clone`
impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            rerender: self.rerender.clone(),
        }
    }
}

impl<T> SharedState<T> {
    pub fn read(&self) -> Ref<'_, T> {
        self.cell.borrow()
    }

    /// Mutate the value and re-render. The borrow ends before returning, so
    /// the result must not borrow from the state.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.cell.borrow_mut();
            f(&mut *value)
        };
        self.rerender.force_update();
        result
    }
}

impl<T> PartialEq for SharedState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

#[hook]
pub fn use_shared_state<T, F>(init: F) -> SharedState<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let cell = use_mut_ref(init);
    let rerender = use_force_update();
    SharedState { cell, rerender }
}
