pub mod batch_converter;
pub mod renderer;

pub use batch_converter::BatchConverter;
pub use renderer::Renderer;
