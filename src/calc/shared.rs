use super::Calculator;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct SharedCalc(Rc<RefCell<Calculator>>);

impl SharedCalc {
    pub fn new(calc: Calculator) -> Self {
        Self(Rc::new(RefCell::new(calc)))
    }

    pub fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }

    pub fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Calculator) -> T,
    {
        f(&mut self.0.borrow_mut())
    }

    pub fn with_ref<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Calculator) -> T,
    {
        f(&self.0.borrow())
    }
}
