pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// Registers an `ObjectCache` backend under a name at program load time.
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $plugin::new()
                                .map_err($crate::errors::TsmartError::cache_connection)?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
