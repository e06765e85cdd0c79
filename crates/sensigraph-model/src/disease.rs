//! Cohort code → disease context.
//!
//! Cohort codes follow the TCGA study abbreviations used by drug-screen
//! releases. Some cohorts span more than one MONDO term (e.g. `BLCA`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseContext {
    pub code: &'static str,
    pub mondo_ids: &'static [&'static str],
    pub name: &'static str,
}

impl DiseaseContext {
    /// Case-insensitive lookup by cohort code.
    pub fn lookup(code: &str) -> Option<&'static DiseaseContext> {
        let code = code.trim();
        DISEASE_CONTEXTS
            .iter()
            .find(|d| d.code.eq_ignore_ascii_case(code))
    }

    pub fn all() -> &'static [DiseaseContext] {
        DISEASE_CONTEXTS
    }
}

macro_rules! disease {
    ($code:literal, [$($id:literal),+], $name:literal) => {
        DiseaseContext {
            code: $code,
            mondo_ids: &[$($id),+],
            name: $name,
        }
    };
}

static DISEASE_CONTEXTS: &[DiseaseContext] = &[
    disease!("ACC", ["MONDO:0008734"], "Adrenocortical carcinoma"),
    disease!("ALL", ["MONDO:0004967"], "Acute lymphoblastic leukemia"),
    disease!("BLCA", ["MONDO:0004056", "MONDO:0004163"], "Bladder Urothelial Carcinoma"),
    disease!("BRCA", ["MONDO:0006256"], "Breast invasive carcinoma"),
    disease!("CESC", ["MONDO:0006143", "MONDO:0000554"], "Cervical squamous cell carcinoma"),
    disease!("CHOL", ["MONDO:0019087"], "Cholangiocarcinoma"),
    disease!("COAD", ["MONDO:0002271"], "Colon adenocarcinoma"),
    disease!("COAD_READ", ["MONDO:0002271", "MONDO:0002169"], "Colon/Rectum adenocarcinoma"),
    disease!("DLBC", ["MONDO:0018905"], "Lymphoid Neoplasm Diffuse Large B-cell Lymphoma"),
    disease!("ESCA", ["MONDO:0003093", "MONDO:0005580"], "Esophageal carcinoma"),
    disease!("GBM", ["MONDO:0018177"], "Glioblastoma multiforme"),
    disease!("HNSC", ["MONDO:0010150"], "Head and Neck squamous cell carcinoma"),
    disease!("KICH", ["MONDO:0017885"], "Kidney Chromophobe"),
    disease!("KIRC", ["MONDO:0005005"], "Kidney renal clear cell carcinoma"),
    disease!("KIRP", ["MONDO:0017884"], "Kidney renal papillary cell carcinoma"),
    disease!("LAML", ["MONDO:0018874"], "Acute Myeloid Leukemia"),
    disease!("LCML", ["MONDO:0011996"], "Chronic Myelogenous Leukemia"),
    disease!("LGG", ["MONDO:0005499"], "Brain Lower Grade Glioma"),
    disease!("LIHC", ["MONDO:0007256"], "Liver hepatocellular carcinoma"),
    disease!("LUAD", ["MONDO:0005061"], "Lung adenocarcinoma"),
    disease!("LUSC", ["MONDO:0005097"], "Lung squamous cell carcinoma"),
    disease!("MESO", ["MONDO:0005065"], "Mesothelioma"),
    disease!("MM", ["MONDO:0009693"], "Multiple myeloma"),
    disease!("NB", ["MONDO:0005072"], "Neuroblastoma"),
    disease!("OV", ["MONDO:0006046"], "Ovarian serous cystadenocarcinoma"),
    disease!("PAAD", ["MONDO:0006047"], "Pancreatic adenocarcinoma"),
    disease!("PANCAN", ["MONDO:0004992"], "Pan-cancer"),
    disease!("PCPG", ["MONDO:0004974", "MONDO:0000448"], "Pheochromocytoma and Paraganglioma"),
    disease!("PRAD", ["MONDO:0005082"], "Prostate adenocarcinoma"),
    disease!("READ", ["MONDO:0002169"], "Rectum adenocarcinoma"),
    disease!("SARC", ["MONDO:0005089"], "Sarcoma"),
    disease!("SCLC", ["MONDO:0008433"], "Small cell lung carcinoma"),
    disease!("SKCM", ["MONDO:0005012"], "Skin Cutaneous Melanoma"),
    disease!("STAD", ["MONDO:0005036"], "Stomach adenocarcinoma"),
    disease!("TGCT", ["MONDO:0010108"], "Testicular Germ Cell Tumors"),
    disease!("THCA", ["MONDO:0015075"], "Thyroid carcinoma"),
    disease!("THYM", ["MONDO:0006456"], "Thymoma"),
    disease!("UCEC", ["MONDO:0000553"], "Uterine Corpus Endometrial Carcinoma"),
    disease!("UCS", ["MONDO:0006485"], "Uterine Carcinosarcoma"),
    disease!("UVM", ["MONDO:0006486"], "Uveal Melanoma"),
];
