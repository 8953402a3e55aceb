// THEORY:
// The `Pixel` is a "dumb" RGBA data container plus the single rule that turns
// a color into a boolean: a pixel is dark when red, green and blue are all
// strictly below a brightness threshold. Alpha is carried along but ignored,
// matching how the counter treats images as opaque.

pub mod pixel {
    pub type Channel = u8;

    /// The default brightness cut-off (out of 255) below which every channel
    /// must fall for a pixel to count as dark.
    pub const DEFAULT_DARK_THRESHOLD: Channel = 128;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Pixel {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// True when every color channel is strictly below `threshold`.
        pub fn is_dark(&self, threshold: Channel) -> bool {
            self.red < threshold && self.green < threshold && self.blue < threshold
        }
    }

    impl From<[Channel; 4]> for Pixel {
        fn from([red, green, blue, alpha]: [Channel; 4]) -> Self {
            Pixel::new(red, green, blue, alpha)
        }
    }

    impl From<&image::Rgba<Channel>> for Pixel {
        fn from(rgba: &image::Rgba<Channel>) -> Self {
            Pixel::from(rgba.0)
        }
    }
}
