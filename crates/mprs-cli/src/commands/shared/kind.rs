/// Bind `$ty` to the record type of `$kind` and evaluate `$body` with it.
///
/// The entity kind arrives as a runtime value from the command line; the
/// handlers are generic over [`mprs_db::records::Record`].
macro_rules! with_record {
    ($kind:expr, $ty:ident => $body:expr) => {
        match $kind {
            mprs_core::enums::EntityKind::Report => {
                type $ty = mprs_core::entities::Report;
                $body
            }
            mprs_core::enums::EntityKind::Author => {
                type $ty = mprs_core::entities::Author;
                $body
            }
            mprs_core::enums::EntityKind::Bathroom => {
                type $ty = mprs_core::entities::Bathroom;
                $body
            }
            mprs_core::enums::EntityKind::Bedroom => {
                type $ty = mprs_core::entities::Bedroom;
                $body
            }
            mprs_core::enums::EntityKind::Entrance => {
                type $ty = mprs_core::entities::Entrance;
                $body
            }
            mprs_core::enums::EntityKind::EnvFactor => {
                type $ty = mprs_core::entities::EnvFactor;
                $body
            }
            mprs_core::enums::EntityKind::Infrastructure => {
                type $ty = mprs_core::entities::Infrastructure;
                $body
            }
            mprs_core::enums::EntityKind::Kitchen => {
                type $ty = mprs_core::entities::Kitchen;
                $body
            }
            mprs_core::enums::EntityKind::LivingRoom => {
                type $ty = mprs_core::entities::LivingRoom;
                $body
            }
        }
    };
}

pub(crate) use with_record;

#[cfg(test)]
mod tests {
    use mprs_core::entity::Entity;
    use mprs_core::enums::EntityKind;

    use super::with_record;

    #[test]
    fn binds_the_matching_record_type() {
        for kind in EntityKind::ALL {
            let bound = with_record!(kind, E => E::KIND);
            assert_eq!(bound, kind);
        }
    }
}
