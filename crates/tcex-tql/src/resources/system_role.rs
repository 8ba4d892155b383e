use crate::filter::define_filter;

define_filter! {
    /// Filter for `/v3/security/systemRoles`.
    SystemRoleFilter => SystemRoles {
        fields {
            active: "active" => Boolean,
            assignable: "assignable" => Boolean,
            displayed: "displayed" => Boolean,
            id: "id" => Integer,
            name: "name" => String,
        }
        relations {}
    }
}
