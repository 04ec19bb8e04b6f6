//! User-facing copy.

pub const TITLE: &str = "어디로 데이트 갈까요? 🗺️";
pub const SUBTITLE: &str = "지도에서 원하는 지역을 클릭하거나 아래 버튼을 눌러보세요";

pub const LOADING_MESSAGE: &str = "지역 정보를 불러오는 중...";
pub const RETRY_LABEL: &str = "다시 시도";

pub const QUICK_SELECT_HEADING: &str = "인기 지역 빠른 선택";

pub const INFO_CARD_TITLE: &str = "선택된 지역 정보";
pub const INFO_PLACES_LABEL: &str = "이용 가능한 장소";
pub const INFO_TIER_LABEL: &str = "지역 등급";
pub const INFO_KEYWORDS_LABEL: &str = "이 지역의 특징";

pub const KEY_HINTS: &str = "q 종료 · Esc 선택 해제 · r 새로고침 · 1-9 빠른 선택";
