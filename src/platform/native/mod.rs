mod gl_;
mod window;

use gl_::Gl;
pub use window::GlfwWindow;
