/// A named operational collection in the document store.
///
/// Implementors are zero-sized markers: `NAME` is the store collection name,
/// `LABEL` the noun used in response messages.
pub trait ResourceCollection: Send + Sync + 'static {
    const NAME: &'static str;
    const LABEL: &'static str;
}

macro_rules! collection {
    ($ty:ident, $name:literal, $label:literal) => {
        pub struct $ty;

        impl ResourceCollection for $ty {
            const NAME: &'static str = $name;
            const LABEL: &'static str = $label;
        }
    };
}

collection!(Supplies, "supplies", "Supply");
collection!(DashboardData, "data", "Data");
collection!(Donations, "donation", "Donation");
collection!(CommunityPosts, "community", "Community post");
collection!(Testimonials, "testimonial", "Testimonial");
collection!(Volunteers, "volunteer", "Volunteer");
