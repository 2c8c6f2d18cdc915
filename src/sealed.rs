pub trait Sealed {}

impl<T> Sealed for crate::ArrayList<T> {}
impl<T> Sealed for crate::LinkedList<T> {}
