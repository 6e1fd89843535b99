use rand::Rng;

/// Cover images shipped with the web client, served under `/covers`.
pub const INTERVIEW_COVERS: &[&str] = &[
    "/adobe.png",
    "/amazon.png",
    "/facebook.png",
    "/hostinger.png",
    "/pinterest.png",
    "/quora.png",
    "/reddit.png",
    "/skype.png",
    "/spotify.png",
    "/telegram.png",
    "/tiktok.png",
    "/yahoo.png",
];

/// Picks a cover uniformly at random. Purely cosmetic.
pub fn random_cover<R: Rng + ?Sized>(rng: &mut R) -> String {
    let index = rng.gen_range(0..INTERVIEW_COVERS.len());
    format!("/covers{}", INTERVIEW_COVERS[index])
}
