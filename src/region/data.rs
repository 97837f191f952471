//! Bundled region display names: ISO 3166-1 alpha-2 plus `XK` (Kosovo).
//!
//! English names are the canonical spelling for country keys, so they follow
//! the ISO short-name style where the common name is ambiguous
//! (`Congo, Democratic Republic of`, `Viet Nam`) and the common name
//! elsewhere (`Russia`, `South Korea`). French and Arabic follow CLDR.

use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy)]
pub struct RegionNames {
    pub en: &'static str,
    pub fr: &'static str,
    pub ar: &'static str,
}

pub static REGION_TABLE: Map<&'static str, RegionNames> = phf_map! {
    "AD" => RegionNames { en: "Andorra", fr: "Andorre", ar: "أندورا" },
    "AE" => RegionNames { en: "United Arab Emirates", fr: "Émirats arabes unis", ar: "الإمارات العربية المتحدة" },
    "AF" => RegionNames { en: "Afghanistan", fr: "Afghanistan", ar: "أفغانستان" },
    "AG" => RegionNames { en: "Antigua and Barbuda", fr: "Antigua-et-Barbuda", ar: "أنتيغوا وبربودا" },
    "AI" => RegionNames { en: "Anguilla", fr: "Anguilla", ar: "أنغويلا" },
    "AL" => RegionNames { en: "Albania", fr: "Albanie", ar: "ألبانيا" },
    "AM" => RegionNames { en: "Armenia", fr: "Arménie", ar: "أرمينيا" },
    "AO" => RegionNames { en: "Angola", fr: "Angola", ar: "أنغولا" },
    "AQ" => RegionNames { en: "Antarctica", fr: "Antarctique", ar: "أنتاركتيكا" },
    "AR" => RegionNames { en: "Argentina", fr: "Argentine", ar: "الأرجنتين" },
    "AS" => RegionNames { en: "American Samoa", fr: "Samoa américaines", ar: "ساموا الأمريكية" },
    "AT" => RegionNames { en: "Austria", fr: "Autriche", ar: "النمسا" },
    "AU" => RegionNames { en: "Australia", fr: "Australie", ar: "أستراليا" },
    "AW" => RegionNames { en: "Aruba", fr: "Aruba", ar: "أروبا" },
    "AX" => RegionNames { en: "Åland Islands", fr: "Îles Åland", ar: "جزر آلاند" },
    "AZ" => RegionNames { en: "Azerbaijan", fr: "Azerbaïdjan", ar: "أذربيجان" },
    "BA" => RegionNames { en: "Bosnia and Herzegovina", fr: "Bosnie-Herzégovine", ar: "البوسنة والهرسك" },
    "BB" => RegionNames { en: "Barbados", fr: "Barbade", ar: "بربادوس" },
    "BD" => RegionNames { en: "Bangladesh", fr: "Bangladesh", ar: "بنغلاديش" },
    "BE" => RegionNames { en: "Belgium", fr: "Belgique", ar: "بلجيكا" },
    "BF" => RegionNames { en: "Burkina Faso", fr: "Burkina Faso", ar: "بوركينا فاسو" },
    "BG" => RegionNames { en: "Bulgaria", fr: "Bulgarie", ar: "بلغاريا" },
    "BH" => RegionNames { en: "Bahrain", fr: "Bahreïn", ar: "البحرين" },
    "BI" => RegionNames { en: "Burundi", fr: "Burundi", ar: "بوروندي" },
    "BJ" => RegionNames { en: "Benin", fr: "Bénin", ar: "بنين" },
    "BL" => RegionNames { en: "Saint Barthélemy", fr: "Saint-Barthélemy", ar: "سان بارتليمي" },
    "BM" => RegionNames { en: "Bermuda", fr: "Bermudes", ar: "برمودا" },
    "BN" => RegionNames { en: "Brunei", fr: "Brunei", ar: "بروناي" },
    "BO" => RegionNames { en: "Bolivia", fr: "Bolivie", ar: "بوليفيا" },
    "BQ" => RegionNames { en: "Caribbean Netherlands", fr: "Pays-Bas caribéens", ar: "هولندا الكاريبية" },
    "BR" => RegionNames { en: "Brazil", fr: "Brésil", ar: "البرازيل" },
    "BS" => RegionNames { en: "Bahamas", fr: "Bahamas", ar: "جزر البهاما" },
    "BT" => RegionNames { en: "Bhutan", fr: "Bhoutan", ar: "بوتان" },
    "BV" => RegionNames { en: "Bouvet Island", fr: "Île Bouvet", ar: "جزيرة بوفيه" },
    "BW" => RegionNames { en: "Botswana", fr: "Botswana", ar: "بوتسوانا" },
    "BY" => RegionNames { en: "Belarus", fr: "Biélorussie", ar: "بيلاروس" },
    "BZ" => RegionNames { en: "Belize", fr: "Belize", ar: "بليز" },
    "CA" => RegionNames { en: "Canada", fr: "Canada", ar: "كندا" },
    "CC" => RegionNames { en: "Cocos (Keeling) Islands", fr: "Îles Cocos", ar: "جزر كوكوس (كيلينغ)" },
    "CD" => RegionNames { en: "Congo, Democratic Republic of", fr: "Congo-Kinshasa", ar: "الكونغو - كينشاسا" },
    "CF" => RegionNames { en: "Central African Republic", fr: "République centrafricaine", ar: "جمهورية أفريقيا الوسطى" },
    "CG" => RegionNames { en: "Congo", fr: "Congo-Brazzaville", ar: "الكونغو - برازافيل" },
    "CH" => RegionNames { en: "Switzerland", fr: "Suisse", ar: "سويسرا" },
    "CI" => RegionNames { en: "Côte d'Ivoire", fr: "Côte d’Ivoire", ar: "ساحل العاج" },
    "CK" => RegionNames { en: "Cook Islands", fr: "Îles Cook", ar: "جزر كوك" },
    "CL" => RegionNames { en: "Chile", fr: "Chili", ar: "تشيلي" },
    "CM" => RegionNames { en: "Cameroon", fr: "Cameroun", ar: "الكاميرون" },
    "CN" => RegionNames { en: "China", fr: "Chine", ar: "الصين" },
    "CO" => RegionNames { en: "Colombia", fr: "Colombie", ar: "كولومبيا" },
    "CR" => RegionNames { en: "Costa Rica", fr: "Costa Rica", ar: "كوستاريكا" },
    "CU" => RegionNames { en: "Cuba", fr: "Cuba", ar: "كوبا" },
    "CV" => RegionNames { en: "Cabo Verde", fr: "Cap-Vert", ar: "الرأس الأخضر" },
    "CW" => RegionNames { en: "Curaçao", fr: "Curaçao", ar: "كوراساو" },
    "CX" => RegionNames { en: "Christmas Island", fr: "Île Christmas", ar: "جزيرة كريسماس" },
    "CY" => RegionNames { en: "Cyprus", fr: "Chypre", ar: "قبرص" },
    "CZ" => RegionNames { en: "Czechia", fr: "Tchéquie", ar: "التشيك" },
    "DE" => RegionNames { en: "Germany", fr: "Allemagne", ar: "ألمانيا" },
    "DJ" => RegionNames { en: "Djibouti", fr: "Djibouti", ar: "جيبوتي" },
    "DK" => RegionNames { en: "Denmark", fr: "Danemark", ar: "الدانمرك" },
    "DM" => RegionNames { en: "Dominica", fr: "Dominique", ar: "دومينيكا" },
    "DO" => RegionNames { en: "Dominican Republic", fr: "République dominicaine", ar: "جمهورية الدومينيكان" },
    "DZ" => RegionNames { en: "Algeria", fr: "Algérie", ar: "الجزائر" },
    "EC" => RegionNames { en: "Ecuador", fr: "Équateur", ar: "الإكوادور" },
    "EE" => RegionNames { en: "Estonia", fr: "Estonie", ar: "إستونيا" },
    "EG" => RegionNames { en: "Egypt", fr: "Égypte", ar: "مصر" },
    "EH" => RegionNames { en: "Western Sahara", fr: "Sahara occidental", ar: "الصحراء الغربية" },
    "ER" => RegionNames { en: "Eritrea", fr: "Érythrée", ar: "إريتريا" },
    "ES" => RegionNames { en: "Spain", fr: "Espagne", ar: "إسبانيا" },
    "ET" => RegionNames { en: "Ethiopia", fr: "Éthiopie", ar: "إثيوبيا" },
    "FI" => RegionNames { en: "Finland", fr: "Finlande", ar: "فنلندا" },
    "FJ" => RegionNames { en: "Fiji", fr: "Fidji", ar: "فيجي" },
    "FK" => RegionNames { en: "Falkland Islands", fr: "Îles Malouines", ar: "جزر فوكلاند" },
    "FM" => RegionNames { en: "Micronesia", fr: "Micronésie", ar: "ميكرونيزيا" },
    "FO" => RegionNames { en: "Faroe Islands", fr: "Îles Féroé", ar: "جزر فارو" },
    "FR" => RegionNames { en: "France", fr: "France", ar: "فرنسا" },
    "GA" => RegionNames { en: "Gabon", fr: "Gabon", ar: "الغابون" },
    "GB" => RegionNames { en: "United Kingdom", fr: "Royaume-Uni", ar: "المملكة المتحدة" },
    "GD" => RegionNames { en: "Grenada", fr: "Grenade", ar: "غرينادا" },
    "GE" => RegionNames { en: "Georgia", fr: "Géorgie", ar: "جورجيا" },
    "GF" => RegionNames { en: "French Guiana", fr: "Guyane française", ar: "غويانا الفرنسية" },
    "GG" => RegionNames { en: "Guernsey", fr: "Guernesey", ar: "غيرنزي" },
    "GH" => RegionNames { en: "Ghana", fr: "Ghana", ar: "غانا" },
    "GI" => RegionNames { en: "Gibraltar", fr: "Gibraltar", ar: "جبل طارق" },
    "GL" => RegionNames { en: "Greenland", fr: "Groenland", ar: "غرينلاند" },
    "GM" => RegionNames { en: "Gambia", fr: "Gambie", ar: "غامبيا" },
    "GN" => RegionNames { en: "Guinea", fr: "Guinée", ar: "غينيا" },
    "GP" => RegionNames { en: "Guadeloupe", fr: "Guadeloupe", ar: "غوادلوب" },
    "GQ" => RegionNames { en: "Equatorial Guinea", fr: "Guinée équatoriale", ar: "غينيا الاستوائية" },
    "GR" => RegionNames { en: "Greece", fr: "Grèce", ar: "اليونان" },
    "GS" => RegionNames { en: "South Georgia and the South Sandwich Islands", fr: "Géorgie du Sud-et-les Îles Sandwich du Sud", ar: "جورجيا الجنوبية وجزر ساندويتش الجنوبية" },
    "GT" => RegionNames { en: "Guatemala", fr: "Guatemala", ar: "غواتيمالا" },
    "GU" => RegionNames { en: "Guam", fr: "Guam", ar: "غوام" },
    "GW" => RegionNames { en: "Guinea-Bissau", fr: "Guinée-Bissau", ar: "غينيا بيساو" },
    "GY" => RegionNames { en: "Guyana", fr: "Guyana", ar: "غيانا" },
    "HK" => RegionNames { en: "Hong Kong", fr: "Hong Kong", ar: "هونغ كونغ" },
    "HM" => RegionNames { en: "Heard and McDonald Islands", fr: "Îles Heard-et-MacDonald", ar: "جزيرة هيرد وجزر ماكدونالد" },
    "HN" => RegionNames { en: "Honduras", fr: "Honduras", ar: "هندوراس" },
    "HR" => RegionNames { en: "Croatia", fr: "Croatie", ar: "كرواتيا" },
    "HT" => RegionNames { en: "Haiti", fr: "Haïti", ar: "هايتي" },
    "HU" => RegionNames { en: "Hungary", fr: "Hongrie", ar: "هنغاريا" },
    "ID" => RegionNames { en: "Indonesia", fr: "Indonésie", ar: "إندونيسيا" },
    "IE" => RegionNames { en: "Ireland", fr: "Irlande", ar: "أيرلندا" },
    "IL" => RegionNames { en: "Israel", fr: "Israël", ar: "إسرائيل" },
    "IM" => RegionNames { en: "Isle of Man", fr: "Île de Man", ar: "جزيرة مان" },
    "IN" => RegionNames { en: "India", fr: "Inde", ar: "الهند" },
    "IO" => RegionNames { en: "British Indian Ocean Territory", fr: "Territoire britannique de l’océan Indien", ar: "الإقليم البريطاني في المحيط الهندي" },
    "IQ" => RegionNames { en: "Iraq", fr: "Irak", ar: "العراق" },
    "IR" => RegionNames { en: "Iran", fr: "Iran", ar: "إيران" },
    "IS" => RegionNames { en: "Iceland", fr: "Islande", ar: "آيسلندا" },
    "IT" => RegionNames { en: "Italy", fr: "Italie", ar: "إيطاليا" },
    "JE" => RegionNames { en: "Jersey", fr: "Jersey", ar: "جيرسي" },
    "JM" => RegionNames { en: "Jamaica", fr: "Jamaïque", ar: "جامايكا" },
    "JO" => RegionNames { en: "Jordan", fr: "Jordanie", ar: "الأردن" },
    "JP" => RegionNames { en: "Japan", fr: "Japon", ar: "اليابان" },
    "KE" => RegionNames { en: "Kenya", fr: "Kenya", ar: "كينيا" },
    "KG" => RegionNames { en: "Kyrgyzstan", fr: "Kirghizistan", ar: "قيرغيزستان" },
    "KH" => RegionNames { en: "Cambodia", fr: "Cambodge", ar: "كمبوديا" },
    "KI" => RegionNames { en: "Kiribati", fr: "Kiribati", ar: "كيريباتي" },
    "KM" => RegionNames { en: "Comoros", fr: "Comores", ar: "جزر القمر" },
    "KN" => RegionNames { en: "Saint Kitts and Nevis", fr: "Saint-Christophe-et-Niévès", ar: "سانت كيتس ونيفيس" },
    "KP" => RegionNames { en: "North Korea", fr: "Corée du Nord", ar: "كوريا الشمالية" },
    "KR" => RegionNames { en: "South Korea", fr: "Corée du Sud", ar: "كوريا الجنوبية" },
    "KW" => RegionNames { en: "Kuwait", fr: "Koweït", ar: "الكويت" },
    "KY" => RegionNames { en: "Cayman Islands", fr: "Îles Caïmans", ar: "جزر كايمان" },
    "KZ" => RegionNames { en: "Kazakhstan", fr: "Kazakhstan", ar: "كازاخستان" },
    "LA" => RegionNames { en: "Laos", fr: "Laos", ar: "لاوس" },
    "LB" => RegionNames { en: "Lebanon", fr: "Liban", ar: "لبنان" },
    "LC" => RegionNames { en: "Saint Lucia", fr: "Sainte-Lucie", ar: "سانت لوسيا" },
    "LI" => RegionNames { en: "Liechtenstein", fr: "Liechtenstein", ar: "ليختنشتاين" },
    "LK" => RegionNames { en: "Sri Lanka", fr: "Sri Lanka", ar: "سريلانكا" },
    "LR" => RegionNames { en: "Liberia", fr: "Libéria", ar: "ليبيريا" },
    "LS" => RegionNames { en: "Lesotho", fr: "Lesotho", ar: "ليسوتو" },
    "LT" => RegionNames { en: "Lithuania", fr: "Lituanie", ar: "ليتوانيا" },
    "LU" => RegionNames { en: "Luxembourg", fr: "Luxembourg", ar: "لوكسمبورغ" },
    "LV" => RegionNames { en: "Latvia", fr: "Lettonie", ar: "لاتفيا" },
    "LY" => RegionNames { en: "Libya", fr: "Libye", ar: "ليبيا" },
    "MA" => RegionNames { en: "Morocco", fr: "Maroc", ar: "المغرب" },
    "MC" => RegionNames { en: "Monaco", fr: "Monaco", ar: "موناكو" },
    "MD" => RegionNames { en: "Moldova", fr: "Moldavie", ar: "مولدوفا" },
    "ME" => RegionNames { en: "Montenegro", fr: "Monténégro", ar: "الجبل الأسود" },
    "MF" => RegionNames { en: "Saint Martin", fr: "Saint-Martin", ar: "سان مارتن" },
    "MG" => RegionNames { en: "Madagascar", fr: "Madagascar", ar: "مدغشقر" },
    "MH" => RegionNames { en: "Marshall Islands", fr: "Îles Marshall", ar: "جزر مارشال" },
    "MK" => RegionNames { en: "North Macedonia", fr: "Macédoine du Nord", ar: "مقدونيا الشمالية" },
    "ML" => RegionNames { en: "Mali", fr: "Mali", ar: "مالي" },
    "MM" => RegionNames { en: "Myanmar", fr: "Myanmar (Birmanie)", ar: "ميانمار (بورما)" },
    "MN" => RegionNames { en: "Mongolia", fr: "Mongolie", ar: "منغوليا" },
    "MO" => RegionNames { en: "Macao", fr: "Macao", ar: "مكاو" },
    "MP" => RegionNames { en: "Northern Mariana Islands", fr: "Îles Mariannes du Nord", ar: "جزر ماريانا الشمالية" },
    "MQ" => RegionNames { en: "Martinique", fr: "Martinique", ar: "جزر المارتينيك" },
    "MR" => RegionNames { en: "Mauritania", fr: "Mauritanie", ar: "موريتانيا" },
    "MS" => RegionNames { en: "Montserrat", fr: "Montserrat", ar: "مونتسرات" },
    "MT" => RegionNames { en: "Malta", fr: "Malte", ar: "مالطا" },
    "MU" => RegionNames { en: "Mauritius", fr: "Maurice", ar: "موريشيوس" },
    "MV" => RegionNames { en: "Maldives", fr: "Maldives", ar: "جزر المالديف" },
    "MW" => RegionNames { en: "Malawi", fr: "Malawi", ar: "ملاوي" },
    "MX" => RegionNames { en: "Mexico", fr: "Mexique", ar: "المكسيك" },
    "MY" => RegionNames { en: "Malaysia", fr: "Malaisie", ar: "ماليزيا" },
    "MZ" => RegionNames { en: "Mozambique", fr: "Mozambique", ar: "موزمبيق" },
    "NA" => RegionNames { en: "Namibia", fr: "Namibie", ar: "ناميبيا" },
    "NC" => RegionNames { en: "New Caledonia", fr: "Nouvelle-Calédonie", ar: "كاليدونيا الجديدة" },
    "NE" => RegionNames { en: "Niger", fr: "Niger", ar: "النيجر" },
    "NF" => RegionNames { en: "Norfolk Island", fr: "Île Norfolk", ar: "جزيرة نورفولك" },
    "NG" => RegionNames { en: "Nigeria", fr: "Nigéria", ar: "نيجيريا" },
    "NI" => RegionNames { en: "Nicaragua", fr: "Nicaragua", ar: "نيكاراغوا" },
    "NL" => RegionNames { en: "Netherlands", fr: "Pays-Bas", ar: "هولندا" },
    "NO" => RegionNames { en: "Norway", fr: "Norvège", ar: "النرويج" },
    "NP" => RegionNames { en: "Nepal", fr: "Népal", ar: "نيبال" },
    "NR" => RegionNames { en: "Nauru", fr: "Nauru", ar: "ناورو" },
    "NU" => RegionNames { en: "Niue", fr: "Niue", ar: "نيوي" },
    "NZ" => RegionNames { en: "New Zealand", fr: "Nouvelle-Zélande", ar: "نيوزيلندا" },
    "OM" => RegionNames { en: "Oman", fr: "Oman", ar: "عُمان" },
    "PA" => RegionNames { en: "Panama", fr: "Panama", ar: "بنما" },
    "PE" => RegionNames { en: "Peru", fr: "Pérou", ar: "بيرو" },
    "PF" => RegionNames { en: "French Polynesia", fr: "Polynésie française", ar: "بولينيزيا الفرنسية" },
    "PG" => RegionNames { en: "Papua New Guinea", fr: "Papouasie-Nouvelle-Guinée", ar: "بابوا غينيا الجديدة" },
    "PH" => RegionNames { en: "Philippines", fr: "Philippines", ar: "الفلبين" },
    "PK" => RegionNames { en: "Pakistan", fr: "Pakistan", ar: "باكستان" },
    "PL" => RegionNames { en: "Poland", fr: "Pologne", ar: "بولندا" },
    "PM" => RegionNames { en: "Saint Pierre and Miquelon", fr: "Saint-Pierre-et-Miquelon", ar: "سان بيير وميكولون" },
    "PN" => RegionNames { en: "Pitcairn Islands", fr: "Îles Pitcairn", ar: "جزر بيتكيرن" },
    "PR" => RegionNames { en: "Puerto Rico", fr: "Porto Rico", ar: "بورتوريكو" },
    "PS" => RegionNames { en: "Palestine", fr: "Territoires palestiniens", ar: "الأراضي الفلسطينية" },
    "PT" => RegionNames { en: "Portugal", fr: "Portugal", ar: "البرتغال" },
    "PW" => RegionNames { en: "Palau", fr: "Palaos", ar: "بالاو" },
    "PY" => RegionNames { en: "Paraguay", fr: "Paraguay", ar: "باراغواي" },
    "QA" => RegionNames { en: "Qatar", fr: "Qatar", ar: "قطر" },
    "RE" => RegionNames { en: "Réunion", fr: "La Réunion", ar: "روينيون" },
    "RO" => RegionNames { en: "Romania", fr: "Roumanie", ar: "رومانيا" },
    "RS" => RegionNames { en: "Serbia", fr: "Serbie", ar: "صربيا" },
    "RU" => RegionNames { en: "Russia", fr: "Russie", ar: "روسيا" },
    "RW" => RegionNames { en: "Rwanda", fr: "Rwanda", ar: "رواندا" },
    "SA" => RegionNames { en: "Saudi Arabia", fr: "Arabie saoudite", ar: "المملكة العربية السعودية" },
    "SB" => RegionNames { en: "Solomon Islands", fr: "Îles Salomon", ar: "جزر سليمان" },
    "SC" => RegionNames { en: "Seychelles", fr: "Seychelles", ar: "سيشل" },
    "SD" => RegionNames { en: "Sudan", fr: "Soudan", ar: "السودان" },
    "SE" => RegionNames { en: "Sweden", fr: "Suède", ar: "السويد" },
    "SG" => RegionNames { en: "Singapore", fr: "Singapour", ar: "سنغافورة" },
    "SH" => RegionNames { en: "Saint Helena", fr: "Sainte-Hélène", ar: "سانت هيلينا" },
    "SI" => RegionNames { en: "Slovenia", fr: "Slovénie", ar: "سلوفينيا" },
    "SJ" => RegionNames { en: "Svalbard and Jan Mayen", fr: "Svalbard et Jan Mayen", ar: "سفالبارد وجان ماين" },
    "SK" => RegionNames { en: "Slovakia", fr: "Slovaquie", ar: "سلوفاكيا" },
    "SL" => RegionNames { en: "Sierra Leone", fr: "Sierra Leone", ar: "سيراليون" },
    "SM" => RegionNames { en: "San Marino", fr: "Saint-Marin", ar: "سان مارينو" },
    "SN" => RegionNames { en: "Senegal", fr: "Sénégal", ar: "السنغال" },
    "SO" => RegionNames { en: "Somalia", fr: "Somalie", ar: "الصومال" },
    "SR" => RegionNames { en: "Suriname", fr: "Suriname", ar: "سورينام" },
    "SS" => RegionNames { en: "South Sudan", fr: "Soudan du Sud", ar: "جنوب السودان" },
    "ST" => RegionNames { en: "São Tomé and Príncipe", fr: "Sao Tomé-et-Principe", ar: "ساو تومي وبرينسيبي" },
    "SV" => RegionNames { en: "El Salvador", fr: "Salvador", ar: "السلفادور" },
    "SX" => RegionNames { en: "Sint Maarten", fr: "Saint-Martin (partie néerlandaise)", ar: "سانت مارتن" },
    "SY" => RegionNames { en: "Syria", fr: "Syrie", ar: "سوريا" },
    "SZ" => RegionNames { en: "Eswatini", fr: "Eswatini", ar: "إسواتيني" },
    "TC" => RegionNames { en: "Turks and Caicos Islands", fr: "Îles Turques-et-Caïques", ar: "جزر توركس وكايكوس" },
    "TD" => RegionNames { en: "Chad", fr: "Tchad", ar: "تشاد" },
    "TF" => RegionNames { en: "French Southern Territories", fr: "Terres australes françaises", ar: "الأقاليم الجنوبية الفرنسية" },
    "TG" => RegionNames { en: "Togo", fr: "Togo", ar: "توغو" },
    "TH" => RegionNames { en: "Thailand", fr: "Thaïlande", ar: "تايلاند" },
    "TJ" => RegionNames { en: "Tajikistan", fr: "Tadjikistan", ar: "طاجيكستان" },
    "TK" => RegionNames { en: "Tokelau", fr: "Tokelau", ar: "توكيلاو" },
    "TL" => RegionNames { en: "Timor-Leste", fr: "Timor oriental", ar: "تيمور - ليشتي" },
    "TM" => RegionNames { en: "Turkmenistan", fr: "Turkménistan", ar: "تركمانستان" },
    "TN" => RegionNames { en: "Tunisia", fr: "Tunisie", ar: "تونس" },
    "TO" => RegionNames { en: "Tonga", fr: "Tonga", ar: "تونغا" },
    "TR" => RegionNames { en: "Turkey", fr: "Turquie", ar: "تركيا" },
    "TT" => RegionNames { en: "Trinidad and Tobago", fr: "Trinité-et-Tobago", ar: "ترينيداد وتوباغو" },
    "TV" => RegionNames { en: "Tuvalu", fr: "Tuvalu", ar: "توفالو" },
    "TW" => RegionNames { en: "Taiwan", fr: "Taïwan", ar: "تايوان" },
    "TZ" => RegionNames { en: "Tanzania", fr: "Tanzanie", ar: "تنزانيا" },
    "UA" => RegionNames { en: "Ukraine", fr: "Ukraine", ar: "أوكرانيا" },
    "UG" => RegionNames { en: "Uganda", fr: "Ouganda", ar: "أوغندا" },
    "UM" => RegionNames { en: "U.S. Outlying Islands", fr: "Îles mineures éloignées des États-Unis", ar: "جزر الولايات المتحدة النائية" },
    "US" => RegionNames { en: "United States", fr: "États-Unis", ar: "الولايات المتحدة" },
    "UY" => RegionNames { en: "Uruguay", fr: "Uruguay", ar: "أورغواي" },
    "UZ" => RegionNames { en: "Uzbekistan", fr: "Ouzbékistan", ar: "أوزبكستان" },
    "VA" => RegionNames { en: "Vatican City", fr: "État de la Cité du Vatican", ar: "الفاتيكان" },
    "VC" => RegionNames { en: "Saint Vincent and the Grenadines", fr: "Saint-Vincent-et-les-Grenadines", ar: "سانت فنسنت وجزر غرينادين" },
    "VE" => RegionNames { en: "Venezuela", fr: "Venezuela", ar: "فنزويلا" },
    "VG" => RegionNames { en: "British Virgin Islands", fr: "Îles Vierges britanniques", ar: "جزر فيرجن البريطانية" },
    "VI" => RegionNames { en: "U.S. Virgin Islands", fr: "Îles Vierges des États-Unis", ar: "جزر فيرجن التابعة للولايات المتحدة" },
    "VN" => RegionNames { en: "Viet Nam", fr: "Viêt Nam", ar: "فيتنام" },
    "VU" => RegionNames { en: "Vanuatu", fr: "Vanuatu", ar: "فانواتو" },
    "WF" => RegionNames { en: "Wallis and Futuna", fr: "Wallis-et-Futuna", ar: "جزر والس وفوتونا" },
    "WS" => RegionNames { en: "Samoa", fr: "Samoa", ar: "ساموا" },
    "XK" => RegionNames { en: "Kosovo", fr: "Kosovo", ar: "كوسوفو" },
    "YE" => RegionNames { en: "Yemen", fr: "Yémen", ar: "اليمن" },
    "YT" => RegionNames { en: "Mayotte", fr: "Mayotte", ar: "مايوت" },
    "ZA" => RegionNames { en: "South Africa", fr: "Afrique du Sud", ar: "جنوب أفريقيا" },
    "ZM" => RegionNames { en: "Zambia", fr: "Zambie", ar: "زامبيا" },
    "ZW" => RegionNames { en: "Zimbabwe", fr: "Zimbabwe", ar: "زيمبابوي" },
};
