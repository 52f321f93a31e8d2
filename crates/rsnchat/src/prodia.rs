//! Prodia model identifiers.
//!
//! The Prodia endpoint selects a Stable Diffusion checkpoint through its
//! `model` field. The service expects the exact token, including the short
//! hash in brackets.

use serde::Serialize;
use std::fmt;

/// A Prodia checkpoint token.
///
/// The associated constants list the checkpoints known to the service. Use
/// [`ProdiaModel::find`] to look a token up, or pass any string to
/// [`RsnChatClient::prodia`](crate::RsnChatClient::prodia) for checkpoints
/// that are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProdiaModel(&'static str);

impl ProdiaModel {
    /// `3Guofeng3_v34.safetensors [50f420de]`
    pub const GUOFENG3_V34: Self = Self("3Guofeng3_v34.safetensors [50f420de]");
    /// `absolutereality_V16.safetensors [37db0fc3]`
    pub const ABSOLUTEREALITY_V16: Self = Self("absolutereality_V16.safetensors [37db0fc3]");
    /// `absolutereality_v181.safetensors [3d9d4d2b]`
    pub const ABSOLUTEREALITY_V181: Self = Self("absolutereality_v181.safetensors [3d9d4d2b]");
    /// `amIReal_V41.safetensors [0a8a2e61]`
    pub const AM_IREAL_V41: Self = Self("amIReal_V41.safetensors [0a8a2e61]");
    /// `analog-diffusion-1.0.ckpt [9ca13f02]`
    pub const ANALOG_DIFFUSION_1_0: Self = Self("analog-diffusion-1.0.ckpt [9ca13f02]");
    /// `anythingv3_0-pruned.ckpt [2700c435]`
    pub const ANYTHINGV3_0_PRUNED: Self = Self("anythingv3_0-pruned.ckpt [2700c435]");
    /// `anything-v4.5-pruned.ckpt [65745d25]`
    pub const ANYTHING_V4_5_PRUNED: Self = Self("anything-v4.5-pruned.ckpt [65745d25]");
    /// `anythingV5_PrtRE.safetensors [893e49b9]`
    pub const ANYTHING_V5_PRT_RE: Self = Self("anythingV5_PrtRE.safetensors [893e49b9]");
    /// `AOM3A3_orangemixs.safetensors [9600da17]`
    pub const AOM3A3_ORANGEMIXS: Self = Self("AOM3A3_orangemixs.safetensors [9600da17]");
    /// `blazing_drive_v10g.safetensors [ca1c1eab]`
    pub const BLAZING_DRIVE_V10G: Self = Self("blazing_drive_v10g.safetensors [ca1c1eab]");
    /// `cetusMix_Version35.safetensors [de2f2560]`
    pub const CETUS_MIX_VERSION35: Self = Self("cetusMix_Version35.safetensors [de2f2560]");
    /// `childrensStories_v13D.safetensors [9dfaabcb]`
    pub const CHILDRENS_STORIES_V13D: Self = Self("childrensStories_v13D.safetensors [9dfaabcb]");
    /// `childrensStories_v1SemiReal.safetensors [a1c56dbb]`
    pub const CHILDRENS_STORIES_V1SEMI_REAL: Self = Self("childrensStories_v1SemiReal.safetensors [a1c56dbb]");
    /// `childrensStories_v1ToonAnime.safetensors [2ec7b88b]`
    pub const CHILDRENS_STORIES_V1TOON_ANIME: Self = Self("childrensStories_v1ToonAnime.safetensors [2ec7b88b]");
    /// `Counterfeit_v30.safetensors [9e2a8f19]`
    pub const COUNTERFEIT_V30: Self = Self("Counterfeit_v30.safetensors [9e2a8f19]");
    /// `cuteyukimixAdorable_midchapter3.safetensors [04bdffe6]`
    pub const CUTEYUKIMIX_ADORABLE_MIDCHAPTER3: Self = Self("cuteyukimixAdorable_midchapter3.safetensors [04bdffe6]");
    /// `cyberrealistic_v33.safetensors [82b0d085]`
    pub const CYBERREALISTIC_V33: Self = Self("cyberrealistic_v33.safetensors [82b0d085]");
    /// `dalcefo_v4.safetensors [425952fe]`
    pub const DALCEFO_V4: Self = Self("dalcefo_v4.safetensors [425952fe]");
    /// `deliberate_v2.safetensors [10ec4b29]`
    pub const DELIBERATE_V2: Self = Self("deliberate_v2.safetensors [10ec4b29]");
    /// `deliberate_v3.safetensors [afd9d2d4]`
    pub const DELIBERATE_V3: Self = Self("deliberate_v3.safetensors [afd9d2d4]");
    /// `dreamlike-anime-1.0.safetensors [4520e090]`
    pub const DREAMLIKE_ANIME_1_0: Self = Self("dreamlike-anime-1.0.safetensors [4520e090]");
    /// `dreamlike-diffusion-1.0.safetensors [5c9fd6e0]`
    pub const DREAMLIKE_DIFFUSION_1_0: Self = Self("dreamlike-diffusion-1.0.safetensors [5c9fd6e0]");
    /// `dreamlike-photoreal-2.0.safetensors [fdcf65e7]`
    pub const DREAMLIKE_PHOTOREAL_2_0: Self = Self("dreamlike-photoreal-2.0.safetensors [fdcf65e7]");
    /// `dreamshaper_6BakedVae.safetensors [114c8abb]`
    pub const DREAMSHAPER_6BAKED_VAE: Self = Self("dreamshaper_6BakedVae.safetensors [114c8abb]");
    /// `dreamshaper_7.safetensors [5cf5ae06]`
    pub const DREAMSHAPER_7: Self = Self("dreamshaper_7.safetensors [5cf5ae06]");
    /// `dreamshaper_8.safetensors [9d40847d]`
    pub const DREAMSHAPER_8: Self = Self("dreamshaper_8.safetensors [9d40847d]");
    /// `edgeOfRealism_eorV20.safetensors [3ed5de15]`
    pub const EDGE_OF_REALISM_EOR_V20: Self = Self("edgeOfRealism_eorV20.safetensors [3ed5de15]");
    /// `EimisAnimeDiffusion_V1.ckpt [4f828a15]`
    pub const EIMIS_ANIME_DIFFUSION_V1: Self = Self("EimisAnimeDiffusion_V1.ckpt [4f828a15]");
    /// `elldreths-vivid-mix.safetensors [342d9d26]`
    pub const ELLDRETHS_VIVID_MIX: Self = Self("elldreths-vivid-mix.safetensors [342d9d26]");
    /// `epicrealism_naturalSinRC1VAE.safetensors [90a4c676]`
    pub const EPICREALISM_NATURAL_SIN_RC1VAE: Self = Self("epicrealism_naturalSinRC1VAE.safetensors [90a4c676]");
    /// `ICantBelieveItsNotPhotography_seco.safetensors [4e7a3dfd]`
    pub const ICANT_BELIEVE_ITS_NOT_PHOTOGRAPHY_SECO: Self = Self("ICantBelieveItsNotPhotography_seco.safetensors [4e7a3dfd]");
    /// `juggernaut_aftermath.safetensors [5e20c455]`
    pub const JUGGERNAUT_AFTERMATH: Self = Self("juggernaut_aftermath.safetensors [5e20c455]");
    /// `lofi_v4.safetensors [ccc204d6]`
    pub const LOFI_V4: Self = Self("lofi_v4.safetensors [ccc204d6]");
    /// `lyriel_v16.safetensors [68fceea2]`
    pub const LYRIEL_V16: Self = Self("lyriel_v16.safetensors [68fceea2]");
    /// `majicmixRealistic_v4.safetensors [29d0de58]`
    pub const MAJICMIX_REALISTIC_V4: Self = Self("majicmixRealistic_v4.safetensors [29d0de58]");
    /// `mechamix_v10.safetensors [ee685731]`
    pub const MECHAMIX_V10: Self = Self("mechamix_v10.safetensors [ee685731]");
    /// `meinamix_meinaV9.safetensors [2ec66ab0]`
    pub const MEINAMIX_MEINA_V9: Self = Self("meinamix_meinaV9.safetensors [2ec66ab0]");
    /// `meinamix_meinaV11.safetensors [b56ce717]`
    pub const MEINAMIX_MEINA_V11: Self = Self("meinamix_meinaV11.safetensors [b56ce717]");
    /// `neverendingDream_v122.safetensors [f964ceeb]`
    pub const NEVERENDING_DREAM_V122: Self = Self("neverendingDream_v122.safetensors [f964ceeb]");
    /// `openjourney_V4.ckpt [ca2f377f]`
    pub const OPENJOURNEY_V4: Self = Self("openjourney_V4.ckpt [ca2f377f]");
    /// `pastelMixStylizedAnime_pruned_fp16.safetensors [793a26e8]`
    pub const PASTEL_MIX_STYLIZED_ANIME_PRUNED_FP16: Self = Self("pastelMixStylizedAnime_pruned_fp16.safetensors [793a26e8]");
    /// `portraitplus_V1.0.safetensors [1400e684]`
    pub const PORTRAITPLUS_V1_0: Self = Self("portraitplus_V1.0.safetensors [1400e684]");
    /// `protogenx34.safetensors [5896f8d5]`
    pub const PROTOGENX34: Self = Self("protogenx34.safetensors [5896f8d5]");
    /// `Realistic_Vision_V1.4-pruned-fp16.safetensors [8d21810b]`
    pub const REALISTIC_VISION_V1_4_PRUNED_FP16: Self = Self("Realistic_Vision_V1.4-pruned-fp16.safetensors [8d21810b]");
    /// `Realistic_Vision_V2.0.safetensors [79587710]`
    pub const REALISTIC_VISION_V2_0: Self = Self("Realistic_Vision_V2.0.safetensors [79587710]");
    /// `Realistic_Vision_V4.0.safetensors [29a7afaa]`
    pub const REALISTIC_VISION_V4_0: Self = Self("Realistic_Vision_V4.0.safetensors [29a7afaa]");
    /// `Realistic_Vision_V5.0.safetensors [614d1063]`
    pub const REALISTIC_VISION_V5_0: Self = Self("Realistic_Vision_V5.0.safetensors [614d1063]");
    /// `redshift_diffusion-V10.safetensors [1400e684]`
    pub const REDSHIFT_DIFFUSION_V10: Self = Self("redshift_diffusion-V10.safetensors [1400e684]");
    /// `revAnimated_v122.safetensors [3f4fefd9]`
    pub const REV_ANIMATED_V122: Self = Self("revAnimated_v122.safetensors [3f4fefd9]");
    /// `rundiffusionFX25D_v10.safetensors [cd12b0ee]`
    pub const RUNDIFFUSION_FX25D_V10: Self = Self("rundiffusionFX25D_v10.safetensors [cd12b0ee]");
    /// `rundiffusionFX_v10.safetensors [cd4e694d]`
    pub const RUNDIFFUSION_FX_V10: Self = Self("rundiffusionFX_v10.safetensors [cd4e694d]");
    /// `sdv1_4.ckpt [7460a6fa]`
    pub const SDV1_4: Self = Self("sdv1_4.ckpt [7460a6fa]");
    /// `shoninsBeautiful_v10.safetensors [25d8c546]`
    pub const SHONINS_BEAUTIFUL_V10: Self = Self("shoninsBeautiful_v10.safetensors [25d8c546]");
    /// `theallys-mix-ii-churned.safetensors [5d9225a4]`
    pub const THEALLYS_MIX_II_CHURNED: Self = Self("theallys-mix-ii-churned.safetensors [5d9225a4]");
    /// `timeless-1.0.ckpt [7c4971d4]`
    pub const TIMELESS_1_0: Self = Self("timeless-1.0.ckpt [7c4971d4]");
    /// `toonyou_beta6.safetensors [980f6b15]`
    pub const TOONYOU_BETA6: Self = Self("toonyou_beta6.safetensors [980f6b15]");
}

impl ProdiaModel {
    /// Every known checkpoint.
    pub const ALL: &'static [Self] = &[
        Self::GUOFENG3_V34,
        Self::ABSOLUTEREALITY_V16,
        Self::ABSOLUTEREALITY_V181,
        Self::AM_IREAL_V41,
        Self::ANALOG_DIFFUSION_1_0,
        Self::ANYTHINGV3_0_PRUNED,
        Self::ANYTHING_V4_5_PRUNED,
        Self::ANYTHING_V5_PRT_RE,
        Self::AOM3A3_ORANGEMIXS,
        Self::BLAZING_DRIVE_V10G,
        Self::CETUS_MIX_VERSION35,
        Self::CHILDRENS_STORIES_V13D,
        Self::CHILDRENS_STORIES_V1SEMI_REAL,
        Self::CHILDRENS_STORIES_V1TOON_ANIME,
        Self::COUNTERFEIT_V30,
        Self::CUTEYUKIMIX_ADORABLE_MIDCHAPTER3,
        Self::CYBERREALISTIC_V33,
        Self::DALCEFO_V4,
        Self::DELIBERATE_V2,
        Self::DELIBERATE_V3,
        Self::DREAMLIKE_ANIME_1_0,
        Self::DREAMLIKE_DIFFUSION_1_0,
        Self::DREAMLIKE_PHOTOREAL_2_0,
        Self::DREAMSHAPER_6BAKED_VAE,
        Self::DREAMSHAPER_7,
        Self::DREAMSHAPER_8,
        Self::EDGE_OF_REALISM_EOR_V20,
        Self::EIMIS_ANIME_DIFFUSION_V1,
        Self::ELLDRETHS_VIVID_MIX,
        Self::EPICREALISM_NATURAL_SIN_RC1VAE,
        Self::ICANT_BELIEVE_ITS_NOT_PHOTOGRAPHY_SECO,
        Self::JUGGERNAUT_AFTERMATH,
        Self::LOFI_V4,
        Self::LYRIEL_V16,
        Self::MAJICMIX_REALISTIC_V4,
        Self::MECHAMIX_V10,
        Self::MEINAMIX_MEINA_V9,
        Self::MEINAMIX_MEINA_V11,
        Self::NEVERENDING_DREAM_V122,
        Self::OPENJOURNEY_V4,
        Self::PASTEL_MIX_STYLIZED_ANIME_PRUNED_FP16,
        Self::PORTRAITPLUS_V1_0,
        Self::PROTOGENX34,
        Self::REALISTIC_VISION_V1_4_PRUNED_FP16,
        Self::REALISTIC_VISION_V2_0,
        Self::REALISTIC_VISION_V4_0,
        Self::REALISTIC_VISION_V5_0,
        Self::REDSHIFT_DIFFUSION_V10,
        Self::REV_ANIMATED_V122,
        Self::RUNDIFFUSION_FX25D_V10,
        Self::RUNDIFFUSION_FX_V10,
        Self::SDV1_4,
        Self::SHONINS_BEAUTIFUL_V10,
        Self::THEALLYS_MIX_II_CHURNED,
        Self::TIMELESS_1_0,
        Self::TOONYOU_BETA6,
    ];

    /// The token sent in the `model` field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// The checkpoint file name without the bracketed hash.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.0.split(" [").next().unwrap_or(self.0)
    }

    /// Look up a known checkpoint by its full token or its file name.
    #[must_use]
    pub fn find(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.0 == token || model.file_name() == token)
    }
}

impl AsRef<str> for ProdiaModel {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for ProdiaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
