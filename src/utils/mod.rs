/*!
# Utilities

- [`SlicedBuffer`](self::sliced_buffer::SlicedBuffer): the offsets + flat buffer storage
  behind [`ForwardStar`](crate::repr::ForwardStar).
*/

pub mod sliced_buffer;
