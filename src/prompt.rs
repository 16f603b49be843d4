//! The instruction template wrapped around the accumulated description, plus
//! the fixed list of schedulers the model is allowed to pick from. Both are
//! configuration data; building a prompt is pure string formatting.

use indoc::formatdoc;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, Display, Serialize, Deserialize, Hash, PartialEq, Eq, EnumIter,
)]
pub enum Scheduler {
    #[strum(to_string = "DDIM")]
    Ddim,
    #[strum(to_string = "DDPM")]
    Ddpm,
    #[strum(to_string = "DEIS")]
    Deis,
    #[strum(to_string = "DEIS Karras")]
    DeisKarras,
    #[strum(to_string = "DPM++ 2S")]
    DpmPlusPlus2S,
    #[strum(to_string = "DPM++ 2S Karras")]
    DpmPlusPlus2SKarras,
    #[strum(to_string = "DPM++ 2M")]
    DpmPlusPlus2M,
    #[strum(to_string = "DPM++ 2M Karras")]
    DpmPlusPlus2MKarras,
    #[strum(to_string = "DPM++ 2M SDE")]
    DpmPlusPlus2MSde,
    #[strum(to_string = "DPM++ 2M SDE Karras")]
    DpmPlusPlus2MSdeKarras,
    #[strum(to_string = "DPM 3M")]
    Dpm3M,
    #[strum(to_string = "DPM 3M Karras")]
    Dpm3MKarras,
    #[strum(to_string = "DPM 3M SDE")]
    Dpm3MSde,
    #[strum(to_string = "DPM 3M SDE Karras")]
    Dpm3MSdeKarras,
    #[strum(to_string = "Euler")]
    Euler,
    #[strum(to_string = "Euler Karras")]
    EulerKarras,
    #[strum(to_string = "Euler Ancestral")]
    EulerAncestral,
    #[strum(to_string = "Heun")]
    Heun,
    #[strum(to_string = "Heun Karras")]
    HeunKarras,
    #[strum(to_string = "KDPM 2")]
    Kdpm2,
    #[strum(to_string = "KDPM 2 Karras")]
    Kdpm2Karras,
    #[strum(to_string = "KDPM 2 Ancestral")]
    Kdpm2Ancestral,
    #[strum(to_string = "KDPM 2 Ancestral Karras")]
    Kdpm2AncestralKarras,
    #[strum(to_string = "LCM")]
    Lcm,
    #[strum(to_string = "LMS")]
    Lms,
    #[strum(to_string = "LMS Karras")]
    LmsKarras,
    #[strum(to_string = "PNDM")]
    Pndm,
    #[strum(to_string = "TCD")]
    Tcd,
    #[strum(to_string = "UniPC")]
    UniPc,
    #[strum(to_string = "UniPC Karras")]
    UniPcKarras,
}

/// The allowed schedulers, comma-joined for interpolation into the prompt.
pub fn allowed_schedulers() -> String {
    Scheduler::iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wraps the accumulated description in the fixed instruction template. The
/// context is inserted verbatim right after the colon, so interactive mode's
/// leading newline per line renders as one description line each.
pub fn build(context: &str) -> String {
    let schedulers = allowed_schedulers();
    formatdoc! {"
        Based on the accumulated description:{context}
        Use proper weights for drawn elements.
        Provide the following items:
        - Positive Stable Diffusion prompt
        - Negative Stable Diffusion prompt
        - CFG Scale
        - Optimum Image Resolution
        - Steps (up to 500)
        - Scheduler (choose from the allowed list): {schedulers}
        Assume model Juggernaut XL v9, no LoRA."
    }
}
