//! Bundled profile content: experience history, skills, certifications.

use folio_ui::{Certification, Experience};

/// Work history in display order, newest first.
pub fn experiences() -> Vec<Experience> {
    vec![
        Experience::new(
            "Worldwide Transportation Performance & Data Scientist",
            "Kering",
            "05/2025 – Current",
            "Italy",
        )
        .with_bullets(vec![
            "Designed and deployed end-to-end machine learning pipelines in Microsoft Fabric \
             (Data Factory, Lakehouse, Synapse, Notebooks) using PySpark, scikit-learn, and \
             SynapseML."
                .to_string(),
            "Integrated GPT-based AI agents within Fabric notebooks for automated root cause \
             deviation analyses via Azure OpenAI."
                .to_string(),
            "Developed predictive Power BI dashboards connected to OneLake for real-time global \
             performance monitoring."
                .to_string(),
            "Implemented data quality monitoring and anomaly detection using Delta tables and \
             Fabric Pipelines."
                .to_string(),
        ]),
        Experience::new(
            "Worldwide Transportation Performance Analyst",
            "Kering",
            "10/2023 – 05/2025",
            "Italy",
        )
        .with_bullets(vec![
            "Built centralized Fabric Lakehouse architecture integrating Dataflows Gen2, \
             Notebooks, and SQL Endpoints."
                .to_string(),
            "Automated ETL processes in Python/PySpark ingesting 5M+ shipment rows/day."
                .to_string(),
            "Implemented Python-based alerting scripts integrated with Azure Functions/Logic \
             Apps, reducing manual monitoring by 70%."
                .to_string(),
            "Partnered with Data Architecture teams to establish data governance.".to_string(),
        ]),
        Experience::new(
            "Digital Business Analyst",
            "ExxonMobil",
            "01/2023 – 07/2023",
            "Global",
        )
        .with_bullets(vec![
            "Improved data quality through SAP-integrated Alteryx and Tableau solutions."
                .to_string(),
            "Created Alteryx workflows cutting data prep time from days to hours.".to_string(),
            "Delivered customized training to 100+ employees to support tool adoption."
                .to_string(),
        ]),
        Experience::new(
            "Winshuttle Citizen Developer",
            "ExxonMobil",
            "04/2021 – 01/2023",
            "Brazil",
        )
        .with_bullets(vec![
            "Built automated workflows and SAP data transformations eliminating manual Excel \
             operations."
                .to_string(),
            "Created validation scripts increasing input accuracy and reducing rework by 40%."
                .to_string(),
            "Provided global user support and governance.".to_string(),
        ]),
        Experience::new(
            "Digital & Innovation Trainee",
            "ExxonMobil",
            "01/2020 – 04/2021",
            "Brazil",
        )
        .with_bullets(vec![
            "Executed process-improvement projects using VBA, Python, Tableau, and Power BI."
                .to_string(),
            "Developed business cases for emerging technologies.".to_string(),
        ]),
    ]
}

/// Skill names cycled through the marquee band.
pub fn skills() -> Vec<String> {
    [
        "PySpark",
        "Microsoft Fabric",
        "Azure OpenAI",
        "Python",
        "SQL",
        "Power BI",
        "Machine Learning",
        "Data Factory",
        "Synapse",
        "Rust",
        "Tableau",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Certification cards.
pub fn certifications() -> Vec<Certification> {
    vec![
        Certification::new(
            "Google Data Analytics",
            "Coursera • 06/2023",
            "Extensive six month job-ready training. Hands-on experience with data cleaning, \
             visualization, and project management.",
            "border-green-400",
        ),
        Certification::new(
            "AWS Certified Cloud Practitioner",
            "Amazon Web Services • 09/2023",
            "Foundational understanding of AWS Cloud architectural principles, cost \
             optimization, and security concepts.",
            "border-orange-400",
        ),
    ]
}
