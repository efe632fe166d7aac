//! Tests for result document composition — free vs paid shapes, catalog
//! content selection, fallbacks, and the pie chart feed.

use scorecard::scoring::calculate_scores;
use scorecard::scoring::results::{ResultsComposer, pie_chart};
use scorecard::{Answer, Category, Question, ReportCatalog, Subcategory, Survey, SurveyType};

fn make_survey() -> Survey {
    Survey {
        id: 1,
        survey_type: SurveyType::Full,
        name: "Business Assessment".into(),
        structure: vec![
            Category {
                id: "product".into(),
                name: "Product".into(),
                subcategories: vec![
                    Subcategory {
                        id: "product_line".into(),
                        name: "Product Line".into(),
                        questions: vec![
                            Question::new(1, "Breadth of line"),
                            Question::new(2, "Line profitability"),
                        ],
                    },
                    Subcategory {
                        id: "personal_brand".into(),
                        name: "Personal Brand".into(),
                        questions: vec![Question::new(3, "Founder visibility")],
                    },
                ],
            },
            Category {
                id: "marketing".into(),
                name: "Marketing".into(),
                subcategories: vec![Subcategory {
                    id: "monetization".into(),
                    name: "Monetization".into(),
                    questions: vec![
                        Question::new(4, "Pricing model"),
                        Question::new(5, "Revenue streams"),
                    ],
                }],
            },
        ],
    }
}

fn answers(scores: [u8; 5]) -> Vec<Answer> {
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| Answer::new(i as u32 + 1, score))
        .collect()
}

const CATALOG: &str = "\
category,subcategory,title_summary,result,result_description,min,max,color
OVERALL,,Overall outlook,Solid foundations,Keep building.,0,100,#6ab04c
PRODUCT,,Product strength,Competitive,Product is competitive.,0,100,#b8e994
PRODUCT,Product Line,Line depth,Focused,Line is focused.,0,100,#78e08f
PRODUCT,Personal Brand,Brand reach,Growing,Brand is growing.,0,100,#fad390
MARKETING,,Marketing reach,Broad,Marketing is broad.,0,100,#f6b93b
MARKETING,Monetization,Revenue mix,Diverse,Revenue is diverse.,0,100,#eb2f06
";

fn full_catalog() -> ReportCatalog {
    ReportCatalog::from_csv("", CATALOG).unwrap()
}

// =========================================================================
// Free documents
// =========================================================================

#[test]
fn free_document_synthesizes_upsell_content() {
    let catalog = ReportCatalog::empty();
    let composer = ResultsComposer::new(&catalog);
    let survey = make_survey();

    let results = composer.compose("s-1", &survey, &answers([8, 6, 9, 7, 5]), false);

    assert_eq!(results.session_id, "s-1");
    assert_eq!(results.survey_type, SurveyType::Full);
    assert_eq!(results.overall_score, 67);

    let product = &results.categories[0];
    assert_eq!(product.name, "Product");
    assert_eq!(product.score, 74);
    assert!(product.subcategories.is_none());
    assert_eq!(product.content.category, "PRODUCT");
    assert_eq!(product.content.subcategory, "");
    assert_eq!(product.content.title_summary, "Product: 74%");
    assert_eq!(product.content.result, "74%");
    assert_eq!(
        product.content.result_description,
        "Your product score is 74%. Upgrade to paid version for detailed analysis."
    );
    assert_eq!(product.content.min, 0);
    assert_eq!(product.content.max, 100);
    assert_eq!(product.content.color, "#b8e994");

    let marketing = &results.categories[1];
    assert_eq!(marketing.score, 56);
    assert!(marketing.subcategories.is_none());
    assert_eq!(marketing.content.title_summary, "Marketing: 56%");
}

#[test]
fn free_document_still_takes_overall_from_catalog() {
    let catalog = full_catalog();
    let composer = ResultsComposer::new(&catalog);

    let results = composer.compose("s-1", &make_survey(), &answers([8, 6, 9, 7, 5]), false);

    assert_eq!(results.overall_content.title_summary, "Overall outlook");
    // Categories stay upsell-shaped regardless of catalog content.
    assert_eq!(results.categories[0].content.title_summary, "Product: 74%");
}

#[test]
fn overall_fallback_when_catalog_misses() {
    let catalog = ReportCatalog::empty();
    let composer = ResultsComposer::new(&catalog);

    let results = composer.compose("s-1", &make_survey(), &answers([8, 6, 9, 7, 5]), true);

    assert_eq!(results.overall_content.category, "OVERALL");
    assert_eq!(results.overall_content.title_summary, "Overall Results");
    assert_eq!(results.overall_content.result, "Score: 67%");
    assert_eq!(
        results.overall_content.result_description,
        "Your overall score is 67%."
    );
    assert_eq!(results.overall_content.color, "#b8e994");
}

// =========================================================================
// Paid documents
// =========================================================================

#[test]
fn paid_document_includes_subcategories() {
    let catalog = ReportCatalog::empty();
    let composer = ResultsComposer::new(&catalog);

    let results = composer.compose("s-1", &make_survey(), &answers([8, 6, 9, 7, 5]), true);

    let product = &results.categories[0];
    let subs = product.subcategories.as_ref().unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].name, "Product Line");
    assert_eq!(subs[0].score, 67);
    assert_eq!(subs[1].name, "Personal Brand");
    assert_eq!(subs[1].score, 89);

    // Catalog is empty, so subcategory content is the fallback shape.
    assert_eq!(subs[1].content.title_summary, "Personal Brand Results");
    assert_eq!(subs[1].content.result, "Score: 89%");
    assert_eq!(
        subs[1].content.result_description,
        "Your personal brand score is 89%."
    );
    assert_eq!(subs[1].content.color, "#78e08f");

    let marketing = &results.categories[1];
    let subs = marketing.subcategories.as_ref().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].name, "Monetization");
    assert_eq!(subs[0].score, 56);
}

#[test]
fn paid_document_uses_catalog_content() {
    let catalog = full_catalog();
    let composer = ResultsComposer::new(&catalog);

    let results = composer.compose("s-1", &make_survey(), &answers([8, 6, 9, 7, 5]), true);

    let product = &results.categories[0];
    assert_eq!(product.content.title_summary, "Product strength");
    assert_eq!(product.content.result, "Competitive");

    let subs = product.subcategories.as_ref().unwrap();
    assert_eq!(subs[0].content.title_summary, "Line depth");
    assert_eq!(subs[0].content.result, "Focused");
    assert_eq!(subs[1].content.title_summary, "Brand reach");

    assert_eq!(results.overall_content.title_summary, "Overall outlook");
}

#[test]
fn composed_scores_match_worked_scenario() {
    let catalog = ReportCatalog::empty();
    let composer = ResultsComposer::new(&catalog);

    let results = composer.compose("s-1", &make_survey(), &answers([7, 8, 6, 9, 5]), true);

    assert_eq!(results.overall_score, 67);
    assert_eq!(results.categories[0].score, 67);
    assert_eq!(results.categories[1].score, 67);

    let product_subs = results.categories[0].subcategories.as_ref().unwrap();
    assert_eq!(product_subs[0].score, 72);
    assert_eq!(product_subs[1].score, 56);
    let marketing_subs = results.categories[1].subcategories.as_ref().unwrap();
    assert_eq!(marketing_subs[0].score, 67);
}

// =========================================================================
// Category details
// =========================================================================

#[test]
fn category_details_lookup_is_case_insensitive() {
    let catalog = full_catalog();
    let composer = ResultsComposer::new(&catalog);
    let survey = make_survey();
    let input = answers([8, 6, 9, 7, 5]);

    for name in ["Product", "PRODUCT", "product"] {
        let details = composer
            .category_details(&survey, &input, name, true)
            .unwrap();
        assert_eq!(details.name, "Product");
        assert_eq!(details.score, 74);
        assert_eq!(details.content.title_summary, "Product strength");
    }
}

#[test]
fn category_details_unknown_name_is_none() {
    let catalog = ReportCatalog::empty();
    let composer = ResultsComposer::new(&catalog);

    let details = composer.category_details(
        &make_survey(),
        &answers([8, 6, 9, 7, 5]),
        "Finance",
        true,
    );
    assert!(details.is_none());
}

#[test]
fn category_details_free_omits_subcategories_but_keeps_narrative() {
    let catalog = full_catalog();
    let composer = ResultsComposer::new(&catalog);

    let details = composer
        .category_details(&make_survey(), &answers([8, 6, 9, 7, 5]), "Marketing", false)
        .unwrap();

    assert!(details.subcategories.is_none());
    assert_eq!(details.content.title_summary, "Marketing reach");
}

#[test]
fn category_details_paid_includes_subcategories() {
    let catalog = full_catalog();
    let composer = ResultsComposer::new(&catalog);

    let details = composer
        .category_details(&make_survey(), &answers([8, 6, 9, 7, 5]), "Marketing", true)
        .unwrap();

    let subs = details.subcategories.as_ref().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].content.title_summary, "Revenue mix");
}

// =========================================================================
// Pie chart
// =========================================================================

#[test]
fn pie_chart_follows_structure_order() {
    let survey = make_survey();
    let scores = calculate_scores(&answers([10, 9, 9, 3, 3]), Some(&survey));

    let chart = pie_chart(&scores, &survey);

    assert_eq!(chart.labels, vec!["Product", "Marketing"]);
    assert_eq!(chart.values, vec![93, 22]);
    assert_eq!(chart.colors, vec!["#6ab04c", "#f6b93b"]);
}

#[test]
fn pie_chart_charts_unanswered_categories_as_zero() {
    let survey = make_survey();
    let scores = calculate_scores(&[Answer::new(1, 8)], Some(&survey));

    let chart = pie_chart(&scores, &survey);

    assert_eq!(chart.values, vec![78, 0]);
    assert_eq!(chart.colors[1], "#eb2f06");
}
