/// Synchronous logic block.
///
/// `logic` is evaluated once per rising clock edge. Implementors read the
/// outputs of their own registers, compute the next state from those values
/// and `inputs`, and return what the block drives after the edge.
pub trait Module {
    type Input;
    type Output;

    fn logic(&mut self, inputs: Self::Input) -> Self::Output;
}
