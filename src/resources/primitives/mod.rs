pub mod box_shape;
pub mod garment_panel;
pub mod plane;
pub mod sphere;

pub use box_shape::create_box;
pub use garment_panel::create_garment_panel;
pub use plane::{PlaneOptions, create_plane};
pub use sphere::{SphereOptions, create_sphere};
