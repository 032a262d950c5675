/// Specifies a set of OpenGL framebuffer capabilities. An instance passed
/// at window creation describes the *requested* format; the format that
/// was actually granted is queried from the drawable once it has been
/// realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlCapabilities {
    /// The number of bits for the color buffer, excluding alpha.
    pub color_bits: u8,
    /// The number of bits for the alpha channel.
    pub alpha_bits: u8,
    /// The number of bits for the depth buffer.
    pub depth_bits: u8,
    /// The number of bits for the stencil buffer.
    pub stencil_bits: u8,
    /// Specifies whether the framebuffer is double buffered.
    pub double_buffered: bool,
    /// The multisampling level to request. `None` indicates that
    /// multisampling must not be enabled.
    pub multisample: Option<u16>,
    /// Specifies whether a hardware accelerated format is required.
    pub hardware_accelerated: bool,
    /// Specifies whether stereoscopic rendering is required.
    pub stereo: bool,
    /// Specifies whether the framebuffer is sRGB capable.
    pub srgb: bool,
}

impl Default for GlCapabilities {
    fn default() -> Self {
        GlCapabilities {
            color_bits: 24,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 8,
            double_buffered: true,
            multisample: None,
            hardware_accelerated: true,
            stereo: false,
            srgb: false,
        }
    }
}
