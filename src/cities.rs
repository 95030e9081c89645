//! Curated city name lists.
//!
//! Entries are kept in curation order. Duplicate keys are intentional where the
//! source data has them; `TranslationTable` decides which one survives.

/// Chinese name -> English name, used when adding `name_en`.
pub const CHINESE_TO_ENGLISH: &[(&str, &str)] = &[
    // Major Chinese cities
    ("北京", "Beijing"),
    ("上海", "Shanghai"),
    ("广州", "Guangzhou"),
    ("深圳", "Shenzhen"),
    ("成都", "Chengdu"),
    ("杭州", "Hangzhou"),
    ("重庆", "Chongqing"),
    ("西安", "Xi'an"),
    ("天津", "Tianjin"),
    ("南京", "Nanjing"),
    ("武汉", "Wuhan"),
    ("苏州", "Suzhou"),
    ("郑州", "Zhengzhou"),
    ("长沙", "Changsha"),
    ("沈阳", "Shenyang"),
    ("青岛", "Qingdao"),
    ("大连", "Dalian"),
    ("厦门", "Xiamen"),
    ("宁波", "Ningbo"),
    ("昆明", "Kunming"),
    ("哈尔滨", "Harbin"),
    ("济南", "Jinan"),
    ("福州", "Fuzhou"),
    ("长春", "Changchun"),
    ("石家庄", "Shijiazhuang"),
    ("合肥", "Hefei"),
    ("南昌", "Nanchang"),
    ("贵阳", "Guiyang"),
    ("太原", "Taiyuan"),
    ("南宁", "Nanning"),
    ("乌鲁木齐", "Urumqi"),
    ("兰州", "Lanzhou"),
    ("海口", "Haikou"),
    ("银川", "Yinchuan"),
    ("呼和浩特", "Hohhot"),
    ("拉萨", "Lhasa"),
    ("西宁", "Xining"),

    // Hebei
    ("保定", "Baoding"),
    ("唐山", "Tangshan"),
    ("秦皇岛", "Qinhuangdao"),
    ("秦皇岛市", "Qinhuangdao"),
    ("邯郸", "Handan"),
    ("邯郸市", "Handan"),
    ("邢台", "Xingtai"),
    ("邢台市", "Xingtai"),
    ("张家口", "Zhangjiakou"),
    ("张家口市", "Zhangjiakou"),
    ("承德", "Chengde"),
    ("承德市", "Chengde"),
    ("沧州", "Cangzhou"),
    ("沧州市", "Cangzhou"),
    ("廊坊", "Langfang"),
    ("廊坊市", "Langfang"),
    ("衡水", "Hengshui"),
    ("衡水市", "Hengshui"),

    // Shanxi
    ("大同", "Datong"),
    ("大同市", "Datong"),
    ("阳泉", "Yangquan"),
    ("阳泉市", "Yangquan"),
    ("长治", "Changzhi"),
    ("长治市", "Changzhi"),
    ("晋城", "Jincheng"),
    ("晋城市", "Jincheng"),
    ("朔州", "Shuozhou"),
    ("朔州市", "Shuozhou"),
    ("晋中", "Jinzhong"),
    ("晋中市", "Jinzhong"),
    ("运城", "Yuncheng"),
    ("运城市", "Yuncheng"),
    ("忻州", "Xinzhou"),
    ("忻州市", "Xinzhou"),
    ("临汾", "Linfen"),
    ("临汾市", "Linfen"),
    ("吕梁", "Lvliang"),
    ("吕梁市", "Lvliang"),

    // Inner Mongolia
    ("包头", "Baotou"),
    ("包头市", "Baotou"),
    ("乌海", "Wuhai"),
    ("乌海市", "Wuhai"),
    ("赤峰", "Chifeng"),
    ("赤峰市", "Chifeng"),
    ("通辽", "Tongliao"),
    ("通辽市", "Tongliao"),
    ("鄂尔多斯", "Ordos"),
    ("鄂尔多斯市", "Ordos"),
    ("呼伦贝尔", "Hulunbuir"),
    ("呼伦贝尔市", "Hulunbuir"),
    ("巴彦淖尔", "Bayannur"),
    ("巴彦淖尔市", "Bayannur"),
    ("乌兰察布", "Ulanqab"),
    ("乌兰察布市", "Ulanqab"),
    ("兴安盟", "Hinggan League"),
    ("锡林郭勒盟", "Xilingol League"),
    ("阿拉善盟", "Alxa League"),

    // Liaoning
    ("鞍山", "Anshan"),
    ("鞍山市", "Anshan"),
    ("抚顺", "Fushun"),
    ("抚顺市", "Fushun"),
    ("本溪", "Benxi"),
    ("本溪市", "Benxi"),
    ("丹东", "Dandong"),
    ("丹东市", "Dandong"),
    ("锦州", "Jinzhou"),
    ("锦州市", "Jinzhou"),
    ("营口", "Yingkou"),
    ("营口市", "Yingkou"),
    ("阜新", "Fuxin"),
    ("阜新市", "Fuxin"),
    ("辽阳", "Liaoyang"),
    ("辽阳市", "Liaoyang"),
    ("盘锦", "Panjin"),
    ("盘锦市", "Panjin"),
    ("铁岭", "Tieling"),
    ("铁岭市", "Tieling"),
    ("朝阳", "Chaoyang"),
    ("朝阳市", "Chaoyang"),
    ("葫芦岛", "Huludao"),
    ("葫芦岛市", "Huludao"),

    // Jilin
    ("吉林", "Jilin"),
    ("吉林市", "Jilin"),
    ("四平", "Siping"),
    ("四平市", "Siping"),
    ("辽源", "Liaoyuan"),
    ("辽源市", "Liaoyuan"),
    ("通化", "Tonghua"),
    ("通化市", "Tonghua"),
    ("白山", "Baishan"),
    ("白山市", "Baishan"),
    ("松原", "Songyuan"),
    ("松原市", "Songyuan"),
    ("白城", "Baicheng"),
    ("白城市", "Baicheng"),
    ("延边朝鲜族自治州", "Yanbian Korean Autonomous Prefecture"),

    // Heilongjiang
    ("齐齐哈尔", "Qiqihar"),
    ("齐齐哈尔市", "Qiqihar"),
    ("鸡西", "Jixi"),
    ("鸡西市", "Jixi"),
    ("鹤岗", "Hegang"),
    ("鹤岗市", "Hegang"),
    ("双鸭山", "Shuangyashan"),
    ("双鸭山市", "Shuangyashan"),
    ("大庆", "Daqing"),
    ("大庆市", "Daqing"),
    ("伊春", "Yichun"),
    ("伊春市", "Yichun"),
    ("佳木斯", "Jiamusi"),
    ("佳木斯市", "Jiamusi"),
    ("七台河", "Qitaihe"),
    ("七台河市", "Qitaihe"),
    ("牡丹江", "Mudanjiang"),
    ("牡丹江市", "Mudanjiang"),
    ("黑河", "Heihe"),
    ("黑河市", "Heihe"),
    ("绥化", "Suihua"),
    ("绥化市", "Suihua"),
    ("大兴安岭地区", "Daxing'anling Prefecture"),

    // Jiangsu
    ("常州市", "Changzhou"),
    ("无锡", "Wuxi"),
    ("常州", "Changzhou"),
    ("南通", "Nantong"),
    ("扬州", "Yangzhou"),
    ("徐州", "Xuzhou"),
    ("连云港", "Lianyungang"),
    ("淮安", "Huai'an"),
    ("盐城", "Yancheng"),
    ("镇江", "Zhenjiang"),
    ("泰州", "Taizhou"),
    ("泰州市", "Taizhou"),
    ("宿迁", "Suqian"),

    // Zhejiang
    ("温州", "Wenzhou"),
    ("绍兴", "Shaoxing"),
    ("金华", "Jinhua"),
    ("台州", "Taizhou"),
    ("湖州", "Huzhou"),
    ("嘉兴", "Jiaxing"),
    ("衢州", "Quzhou"),
    ("衢州市", "Quzhou"),
    ("舟山", "Zhoushan"),
    ("舟山市", "Zhoushan"),
    ("丽水", "Lishui"),
    ("丽水市", "Lishui"),

    // Anhui
    ("芜湖", "Wuhu"),
    ("蚌埠", "Bengbu"),
    ("安庆", "Anqing"),
    ("马鞍山", "Maanshan"),
    ("淮南", "Huainan"),
    ("淮南市", "Huainan"),
    ("淮北", "Huaibei"),
    ("淮北市", "Huaibei"),
    ("铜陵", "Tongling"),
    ("铜陵市", "Tongling"),
    ("黄山", "Huangshan"),
    ("黄山市", "Huangshan"),
    ("滁州", "Chuzhou"),
    ("滁州市", "Chuzhou"),
    ("阜阳", "Fuyang"),
    ("阜阳市", "Fuyang"),
    ("宿州", "Suzhou"),
    ("宿州市", "Suzhou"),
    ("六安", "Lu'an"),
    ("六安市", "Lu'an"),
    ("亳州", "Bozhou"),
    ("亳州市", "Bozhou"),
    ("池州", "Chizhou"),
    ("池州市", "Chizhou"),
    ("宣城", "Xuancheng"),
    ("宣城市", "Xuancheng"),

    // Guangdong
    ("东莞", "Dongguan"),
    ("佛山", "Foshan"),
    ("珠海", "Zhuhai"),
    ("惠州", "Huizhou"),
    ("中山", "Zhongshan"),
    ("江门", "Jiangmen"),

    // Thailand
    ("曼谷", "Bangkok"),
    ("清迈", "Chiang Mai"),
    ("普吉", "Phuket"),
    ("芭提雅", "Pattaya"),
    ("春武里", "Chon Buri"),
    ("合艾", "Hat Yai"),
    ("呵叻", "Nakhon Ratchasima"),
    ("乌隆", "Udon Thani"),
    ("孔敬", "Khon Kaen"),
    ("素叻他尼", "Surat Thani"),

    // International
    ("东京", "Tokyo"),
    ("大阪", "Osaka"),
    ("新加坡", "Singapore"),
    ("巴厘岛", "Bali"),
    ("巴塞罗那", "Barcelona"),
    ("里斯本", "Lisbon"),
    ("墨西哥城", "Mexico City"),
];

/// English name -> Chinese name, used when renaming cities to Chinese.
pub const ENGLISH_TO_CHINESE: &[(&str, &str)] = &[
    // Major Chinese cities
    ("Beijing", "北京"),
    ("Shanghai", "上海"),
    ("Guangzhou", "广州"),
    ("Shenzhen", "深圳"),
    ("Chengdu", "成都"),
    ("Hangzhou", "杭州"),
    ("Chongqing", "重庆"),
    ("Xi'an", "西安"),
    ("Xian", "西安"),
    ("Tianjin", "天津"),
    ("Nanjing", "南京"),
    ("Wuhan", "武汉"),
    ("Suzhou", "苏州"),
    ("Zhengzhou", "郑州"),
    ("Changsha", "长沙"),
    ("Shenyang", "沈阳"),
    ("Qingdao", "青岛"),
    ("Dalian", "大连"),
    ("Xiamen", "厦门"),
    ("Ningbo", "宁波"),
    ("Kunming", "昆明"),
    ("Harbin", "哈尔滨"),
    ("Jinan", "济南"),
    ("Fuzhou", "福州"),
    ("Changchun", "长春"),
    ("Shijiazhuang", "石家庄"),
    ("Hefei", "合肥"),
    ("Nanchang", "南昌"),
    ("Guiyang", "贵阳"),
    ("Taiyuan", "太原"),
    ("Nanning", "南宁"),
    ("Urumqi", "乌鲁木齐"),
    ("Lanzhou", "兰州"),
    ("Haikou", "海口"),
    ("Yinchuan", "银川"),
    ("Hohhot", "呼和浩特"),
    ("Lhasa", "拉萨"),
    ("Xining", "西宁"),
    ("Baoding", "保定"),
    ("Tangshan", "唐山"),
    ("Dongguan", "东莞"),
    ("Foshan", "佛山"),
    ("Zhuhai", "珠海"),
    ("Huizhou", "惠州"),
    ("Zhongshan", "中山"),
    ("Jiangmen", "江门"),
    ("Shaoxing", "绍兴"),
    ("Wenzhou", "温州"),
    ("Jinhua", "金华"),
    ("Taizhou", "台州"),
    ("Huzhou", "湖州"),
    ("Jiaxing", "嘉兴"),
    ("Wuxi", "无锡"),
    ("Changzhou", "常州"),
    ("Nantong", "南通"),
    ("Yangzhou", "扬州"),
    ("Xuzhou", "徐州"),
    ("Lianyungang", "连云港"),
    ("Huai'an", "淮安"),
    ("Yancheng", "盐城"),
    ("Zhenjiang", "镇江"),
    ("Taizhou", "泰州"),
    ("Suqian", "宿迁"),

    // Thailand
    ("Bangkok", "曼谷"),
    ("Chiang Mai", "清迈"),
    ("Phuket", "普吉"),
    ("Pattaya", "芭提雅"),
    ("Chon Buri", "春武里"),
    ("Hat Yai", "合艾"),
    ("Nakhon Ratchasima", "呵叻"),
    ("Udon Thani", "乌隆"),
    ("Khon Kaen", "孔敬"),
    ("Surat Thani", "素叻他尼"),
    ("Nonthaburi", "暖武里"),
    ("Pak Kret", "北榄"),
    ("Samut Prakan", "北榄府"),
    ("Ubon Ratchathani", "乌汶"),
    ("Nakhon Si Thammarat", "洛坤"),
    ("Chiang Rai", "清莱"),
    ("Songkhla", "宋卡"),
    ("Nakhon Sawan", "那空沙旺"),
    ("Rayong", "罗勇"),
    ("Lampang", "南邦"),

    // Japan
    ("Tokyo", "东京"),
    ("Osaka", "大阪"),
    ("Kyoto", "京都"),
    ("Yokohama", "横滨"),
    ("Nagoya", "名古屋"),
    ("Sapporo", "札幌"),
    ("Fukuoka", "福冈"),
    ("Kobe", "神户"),

    // South Korea
    ("Seoul", "首尔"),
    ("Busan", "釜山"),
    ("Incheon", "仁川"),
    ("Daegu", "大邱"),
    ("Daejeon", "大田"),
    ("Gwangju", "光州"),
    ("Jeju", "济州"),

    // Rest of Asia
    ("Singapore", "新加坡"),
    ("Kuala Lumpur", "吉隆坡"),
    ("Penang", "槟城"),
    ("Johor Bahru", "新山"),
    ("Hanoi", "河内"),
    ("Ho Chi Minh City", "胡志明市"),
    ("Da Nang", "岘港"),
    ("Jakarta", "雅加达"),
    ("Bali", "巴厘岛"),
    ("Surabaya", "泗水"),
    ("Manila", "马尼拉"),
    ("Cebu", "宿务"),
    ("Mumbai", "孟买"),
    ("New Delhi", "新德里"),
    ("Bangalore", "班加罗尔"),
    ("Kolkata", "加尔各答"),
    ("Chennai", "金奈"),

    // Europe
    ("London", "伦敦"),
    ("Paris", "巴黎"),
    ("Berlin", "柏林"),
    ("Rome", "罗马"),
    ("Madrid", "马德里"),
    ("Barcelona", "巴塞罗那"),
    ("Amsterdam", "阿姆斯特丹"),
    ("Brussels", "布鲁塞尔"),
    ("Vienna", "维也纳"),
    ("Zurich", "苏黎世"),
    ("Moscow", "莫斯科"),
    ("Saint Petersburg", "圣彼得堡"),

    // Americas
    ("New York", "纽约"),
    ("Los Angeles", "洛杉矶"),
    ("Chicago", "芝加哥"),
    ("San Francisco", "旧金山"),
    ("Seattle", "西雅图"),
    ("Boston", "波士顿"),
    ("Washington", "华盛顿"),
    ("Miami", "迈阿密"),
    ("Las Vegas", "拉斯维加斯"),
    ("Toronto", "多伦多"),
    ("Vancouver", "温哥华"),
    ("Montreal", "蒙特利尔"),

    // Australia
    ("Sydney", "悉尼"),
    ("Melbourne", "墨尔本"),
    ("Brisbane", "布里斯班"),
    ("Perth", "珀斯"),

    // Middle East
    ("Dubai", "迪拜"),
    ("Abu Dhabi", "阿布扎比"),
    ("Tel Aviv", "特拉维夫"),
];
