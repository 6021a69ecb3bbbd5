/// Generates named accessor(s) for a single register of the shadow file.
macro_rules! impl_register_accessor {
    // Status/identity registers - the chip ignores them on write, so only a getter
    (ro $name:ident => $reg:ident) => {
        paste::paste! {
            #[doc = "Returns the shadowed `" $reg "` word."]
            #[inline]
            pub fn $name(&self) -> u16 {
                self.get(Register::$reg)
            }
        }
    };
    // Control block registers - getter, staging setter and read-modify-write
    (rw $name:ident => $reg:ident) => {
        paste::paste! {
            #[doc = "Returns the shadowed `" $reg "` word."]
            #[inline]
            pub fn $name(&self) -> u16 {
                self.get(Register::$reg)
            }

            #[doc = "Stages a new `" $reg "` word, replacing every bit and marking it dirty."]
            #[inline]
            pub fn [<set_ $name>](&mut self, value: u16) {
                self.set(Register::$reg, value)
            }

            #[doc = "Read-modify-write of the shadowed `" $reg "` word, marking it dirty."]
            #[inline]
            pub fn [<modify_ $name>]<F>(&mut self, f: F)
            where
                F: FnOnce(u16) -> u16,
            {
                self.modify(Register::$reg, f)
            }
        }
    };
}

/// Generates accessors for a list of `ro`/`rw` register declarations.
macro_rules! impl_register_accessors {
    ($($access:ident $name:ident => $reg:ident),* $(,)?) => {
        $(impl_register_accessor!($access $name => $reg);)*
    };
}

pub(super) use impl_register_accessor;
pub(super) use impl_register_accessors;
