//! Macros for implementing traits on opaque invariant wrapper types.
//!
//! The public producers of this crate are newtypes around an [`Invariant`](crate::producer::Invariant) that wraps the actual implementation. These macros forward to that implementation.

/// Implement `Debug` for an opaque invariant wrapper type.
macro_rules! invarianted_impl_debug {
    ($outer:ident $(< $( $lt:tt $( : $clt:tt $(+ $dlt:tt )* )? ),+ >)? ) => {
        impl $(< $( $lt $( : $clt $(+ $dlt )* )? ),+ >)?
            core::fmt::Debug
        for $outer
            $(< $( $lt ),+ >)?
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.0, f)
            }
        }
    }
}

/// Implement `Wrapper` for an opaque invariant wrapper type.
macro_rules! invarianted_impl_wrapper {
    ($outer:ident $(< $( $lt:tt $( : $clt:tt $(+ $dlt:tt )* )? ),+ >)?; $t:ty) => {
        impl $(< $( $lt $( : $clt $(+ $dlt )* )? ),+ >)?
            wrapper::Wrapper<$t>
        for $outer
            $(< $( $lt ),+ >)?
        {
            fn into_inner(self) -> $t {
                self.0.into_inner().into_inner()
            }
        }
    }
}

/// Implement `Producer` for an opaque invariant wrapper type.
macro_rules! invarianted_impl_producer {
    ($outer:ident $(< $( $lt:tt $( : $clt:tt $(+ $dlt:tt )* )? ),+ >)?; Item $t_item:ty; Error $t_error:ty) => {
        impl $(< $( $lt $( : $clt $(+ $dlt )* )? ),+ >)?
            $crate::Producer
        for $outer
            $(< $( $lt ),+ >)?
        {
            type Item = $t_item;
            type Error = $t_error;

            fn produce(
                &mut self,
            ) -> Result<either::Either<Self::Item, $crate::Exhausted>, Self::Error> {
                $crate::Producer::produce(&mut self.0)
            }
        }
    }
}
