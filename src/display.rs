use crate::bmp::EncodedFrame;

/// Contract with the panel driver that consumes encoded frames.
///
/// Frames handed to [`DisplayDevice::display`] are already at the panel's
/// native 800x480 resolution; drivers of this class do not resize. The
/// expected call sequence per refresh is `prepare`, `display`, then
/// `sleep` to power the panel down between updates; `close` releases the
/// device for good.
pub trait DisplayDevice {
    type Error;

    fn prepare(&mut self) -> Result<(), Self::Error>;
    fn display(&mut self, frame: &EncodedFrame) -> Result<(), Self::Error>;
    fn sleep(&mut self) -> Result<(), Self::Error>;
    fn close(&mut self) -> Result<(), Self::Error>;
}
