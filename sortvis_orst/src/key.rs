/// Integer element that the distribution sorts know how to bucket.
///
/// Comparison sorts only need [`Ord`]; counting and radix sort also need to turn an element
/// into a number they can index with.
pub trait IntKey: Ord + Copy {
    fn to_i64(self) -> i64;
}

macro_rules! impl_int_key {
    ($($ty:ty),*) => {
        $(
            impl IntKey for $ty {
                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, u8, u16, u32);
