/// Which view the application is showing.
///
/// A single explicit state drives rendering; the frontend shows the
/// setup form in `Setup` and the terminal in `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
}
